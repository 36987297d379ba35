//! Moderation rule domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::rule::{CreateRuleDto, RuleDto, UpdateRuleDto},
    server::error::AppError,
};

/// Rule kinds accepted by the dashboard.
pub const RULE_TYPES: [&str; 2] = ["COMMAND", "AUTO"];

const INVALID_RULE: &str = "Invalid rule data";

#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub id: i32,
    pub server_id: String,
    pub name: String,
    pub rule_type: String,
    pub description: String,
    pub permission: Option<String>,
    pub trigger: Option<String>,
    pub usage_count: i32,
    pub trigger_count: i32,
    pub is_active: bool,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Rule {
    pub fn into_dto(self) -> RuleDto {
        RuleDto {
            id: self.id,
            server_id: self.server_id,
            name: self.name,
            rule_type: self.rule_type,
            description: self.description,
            permission: self.permission,
            trigger: self.trigger,
            usage_count: self.usage_count,
            trigger_count: self.trigger_count,
            is_active: self.is_active,
            created_by: self.created_by,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::rule::Model) -> Self {
        Self {
            id: entity.id,
            server_id: entity.server_id,
            name: entity.name,
            rule_type: entity.rule_type,
            description: entity.description,
            permission: entity.permission,
            trigger: entity.trigger,
            usage_count: entity.usage_count,
            trigger_count: entity.trigger_count,
            is_active: entity.is_active,
            created_by: entity.created_by,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRuleParams {
    pub server_id: String,
    pub name: String,
    pub rule_type: String,
    pub description: String,
    pub permission: Option<String>,
    pub trigger: Option<String>,
    pub is_active: bool,
    pub created_by: Option<String>,
}

impl CreateRuleParams {
    /// Validates the payload and attaches the owning server and author.
    ///
    /// # Returns
    /// - `Ok(CreateRuleParams)` - Name and description are non-blank and type is known
    /// - `Err(AppError::BadRequest)` - `"Invalid rule data"`
    pub fn from_dto(
        server_id: String,
        created_by: String,
        dto: CreateRuleDto,
    ) -> Result<Self, AppError> {
        validate_text(&dto.name)?;
        validate_text(&dto.description)?;
        validate_type(&dto.rule_type)?;

        Ok(Self {
            server_id,
            name: dto.name.trim().to_string(),
            rule_type: dto.rule_type,
            description: dto.description,
            permission: dto.permission,
            trigger: dto.trigger,
            is_active: dto.is_active.unwrap_or(true),
            created_by: Some(created_by),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateRuleParams {
    pub name: Option<String>,
    pub rule_type: Option<String>,
    pub description: Option<String>,
    /// Outer Option indicates field presence, inner for nullable value
    pub permission: Option<Option<String>>,
    pub trigger: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl UpdateRuleParams {
    pub fn from_dto(dto: UpdateRuleDto) -> Result<Self, AppError> {
        if let Some(name) = &dto.name {
            validate_text(name)?;
        }
        if let Some(description) = &dto.description {
            validate_text(description)?;
        }
        if let Some(rule_type) = &dto.rule_type {
            validate_type(rule_type)?;
        }

        Ok(Self {
            name: dto.name.map(|name| name.trim().to_string()),
            rule_type: dto.rule_type,
            description: dto.description,
            permission: dto.permission,
            trigger: dto.trigger,
            is_active: dto.is_active,
        })
    }
}

fn validate_text(value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(INVALID_RULE.to_string()));
    }
    Ok(())
}

fn validate_type(rule_type: &str) -> Result<(), AppError> {
    if !RULE_TYPES.contains(&rule_type) {
        return Err(AppError::BadRequest(INVALID_RULE.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_dto(rule_type: &str, name: &str) -> CreateRuleDto {
        CreateRuleDto {
            name: name.to_string(),
            rule_type: rule_type.to_string(),
            description: "Blocks invite links".to_string(),
            permission: None,
            trigger: Some("discord.gg/".to_string()),
            is_active: None,
        }
    }

    #[test]
    fn accepts_known_rule_types() {
        for rule_type in RULE_TYPES {
            let params =
                CreateRuleParams::from_dto("1".into(), "mod".into(), create_dto(rule_type, "r"))
                    .unwrap();
            assert!(params.is_active);
            assert_eq!(params.created_by.as_deref(), Some("mod"));
        }
    }

    #[test]
    fn rejects_unknown_type_and_blank_name() {
        assert!(matches!(
            CreateRuleParams::from_dto("1".into(), "m".into(), create_dto("REGEX", "r")),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            CreateRuleParams::from_dto("1".into(), "m".into(), create_dto("AUTO", "  ")),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn update_distinguishes_null_from_absent() {
        let dto: UpdateRuleDto =
            serde_json::from_str(r#"{"trigger":null,"permission":"ADMIN"}"#).unwrap();
        let params = UpdateRuleParams::from_dto(dto).unwrap();

        assert_eq!(params.trigger, Some(None));
        assert_eq!(params.permission, Some(Some("ADMIN".to_string())));

        let absent: UpdateRuleDto = serde_json::from_str("{}").unwrap();
        let params = UpdateRuleParams::from_dto(absent).unwrap();

        assert_eq!(params.trigger, None);
        assert_eq!(params.permission, None);
    }

    #[test]
    fn update_validates_only_present_fields() {
        assert!(UpdateRuleParams::from_dto(UpdateRuleDto::default()).is_ok());

        let bad = UpdateRuleDto {
            rule_type: Some("command".to_string()),
            ..Default::default()
        };
        assert!(UpdateRuleParams::from_dto(bad).is_err());
    }
}
