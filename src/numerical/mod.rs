pub mod gray_code;
