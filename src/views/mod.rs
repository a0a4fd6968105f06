pub mod message_board;
pub mod server_info;

pub use message_board::MessageBoard;
pub use server_info::ServerInfo;
