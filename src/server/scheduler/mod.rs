pub mod bot_status;
