//! Pre-match leaderboard lookup.
//!
//! A single read-only query against an external Postgres store, run once
//! before a match starts and used purely for display. The engine never
//! writes to this store, and a match proceeds normally when it is
//! unreachable.

use chrono::NaiveDateTime;
use sqlx::postgres::PgPoolOptions;

/// One leaderboard row, most recently seen players first.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct LeaderboardEntry {
    pub name: String,
    pub wins: i64,
    pub last_seen: NaiveDateTime,
}

const TOP_QUERY: &str = "SELECT name, wins, last_seen FROM users ORDER BY last_seen DESC";

/// Connects to the given database and fetches the full leaderboard,
/// ordered by recency.
pub async fn fetch_top(database_url: &str) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(database_url)
        .await?;
    let entries = sqlx::query_as::<_, LeaderboardEntry>(TOP_QUERY)
        .fetch_all(&pool)
        .await?;
    pool.close().await;
    Ok(entries)
}

/// Formats one row the way the pre-match screen prints it.
pub fn format_entry(entry: &LeaderboardEntry) -> String {
    format!(
        "Name: {}  Wins: {}  Last Seen: {}",
        entry.name, entry.wins, entry.last_seen
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn entry_formats_on_one_line() {
        let entry = LeaderboardEntry {
            name: "ada".to_string(),
            wins: 12,
            last_seen: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(18, 30, 0)
                .unwrap(),
        };
        assert_eq!(
            format_entry(&entry),
            "Name: ada  Wins: 12  Last Seen: 2024-03-01 18:30:00"
        );
    }
}
