use chrono::{DateTime, Utc};
use sqlx::PgPool;
use storage::{
    dto::settings::{
        COMPETITION_END_KEY, COMPETITION_START_KEY, CompetitionSettings, UpdateSettingsRequest,
    },
    error::Result,
    repository::settings::SettingsRepository,
};

/// Parse a stored timestamp. Unreadable values count as unset.
fn parse_timestamp(key: &str, value: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(value) {
        Ok(parsed) => Some(parsed.with_timezone(&Utc)),
        Err(e) => {
            tracing::warn!(key, value, "Ignoring unreadable setting: {}", e);
            None
        }
    }
}

async fn read_timestamp(repo: &SettingsRepository<'_>, key: &str) -> Result<Option<DateTime<Utc>>> {
    let setting = repo.get(key).await?;
    Ok(setting.and_then(|s| parse_timestamp(key, &s.value)))
}

/// Current competition period
pub async fn get_settings(pool: &PgPool) -> Result<CompetitionSettings> {
    let repo = SettingsRepository::new(pool);

    Ok(CompetitionSettings {
        competition_start: read_timestamp(&repo, COMPETITION_START_KEY).await?,
        competition_end: read_timestamp(&repo, COMPETITION_END_KEY).await?,
    })
}

/// Store the fields present in `request` once the resulting period is valid
pub async fn update_settings(
    pool: &PgPool,
    request: &UpdateSettingsRequest,
) -> Result<CompetitionSettings> {
    let merged = get_settings(pool).await?.merged_with(request);
    merged.window().validate()?;

    let repo = SettingsRepository::new(pool);
    if let Some(start) = request.competition_start {
        repo.upsert(COMPETITION_START_KEY, &start.to_rfc3339()).await?;
    }
    if let Some(end) = request.competition_end {
        repo.upsert(COMPETITION_END_KEY, &end.to_rfc3339()).await?;
    }

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp_normalizes_offset() {
        let parsed = parse_timestamp(COMPETITION_START_KEY, "2025-03-01T02:00:00+02:00");
        assert_eq!(parsed, Some("2025-03-01T00:00:00Z".parse().unwrap()));
    }

    #[test]
    fn test_parse_timestamp_ignores_garbage() {
        assert_eq!(parse_timestamp(COMPETITION_END_KEY, "next friday"), None);
    }
}
