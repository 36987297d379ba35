mod bot_status;
mod discord_server;
mod history;
mod rule;
mod user;
