pub mod archive_client;
