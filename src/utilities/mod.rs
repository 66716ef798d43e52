pub mod decode_document;
pub mod init_logging;
pub mod save_document;
