pub use super::bot_status::Entity as BotStatus;
pub use super::discord_server::Entity as DiscordServer;
pub use super::rule::Entity as Rule;
pub use super::statistics::Entity as Statistics;
pub use super::uptime_record::Entity as UptimeRecord;
pub use super::user::Entity as User;
