use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        bot::{BotGuildDto, BotInfoDto, BotStatusDto, UpdateBotStatusDto},
        rule::{CreateRuleDto, RuleDto, UpdateRuleDto},
        server::{AuthorizedServerDto, DiscordServerDto},
        statistics::{StatisticsDto, UptimeRecordDto},
        user::UserDto,
    },
    server::controller::{auth, bot_status, discord, rule, server, statistics},
};

/// OpenAPI document served at `/api/docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(title = "Guildboard API", description = "Discord bot dashboard backend"),
    paths(
        auth::login,
        auth::callback,
        auth::get_user,
        auth::logout,
        server::get_servers,
        server::get_server,
        rule::get_rules,
        rule::create_rule,
        rule::update_rule,
        rule::delete_rule,
        statistics::get_statistics,
        statistics::get_uptime,
        bot_status::get_bot_status,
        bot_status::update_bot_status,
        discord::get_guilds,
        discord::get_stats,
    ),
    components(schemas(
        ErrorDto,
        SuccessDto,
        UserDto,
        AuthorizedServerDto,
        DiscordServerDto,
        RuleDto,
        CreateRuleDto,
        UpdateRuleDto,
        StatisticsDto,
        UptimeRecordDto,
        BotStatusDto,
        UpdateBotStatusDto,
        BotGuildDto,
        BotInfoDto,
    )),
    tags(
        (name = "auth", description = "Discord login and session"),
        (name = "server", description = "Servers the user may administer"),
        (name = "rule", description = "Per-server bot rules"),
        (name = "statistics", description = "Per-server statistics and uptime"),
        (name = "bot-status", description = "Bot status and announcements"),
        (name = "discord", description = "Live bot gateway data"),
    )
)]
pub struct ApiDoc;
