//! Runs the MySQL statements against a live MySQL 8 server.
//!
//! Set `TEST_DATABASE_URL` and run with `cargo test -- --ignored`. The
//! schema is created as temporary tables on a single pooled connection, so
//! they shadow any real tables for the session and vanish with it.

use chrono::NaiveDate;
use storage::{ConnectionTarget, Database, DatabaseSettings, RaceStore, StorageError};

const SCHEMA: [&str; 5] = [
    r#"CREATE TEMPORARY TABLE races (
        id BIGINT PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        date DATE NOT NULL,
        location VARCHAR(255),
        organizer VARCHAR(255),
        race_type VARCHAR(64),
        distances TEXT,
        website_url VARCHAR(512),
        protocol_url VARCHAR(512),
        is_active TINYINT(1) NOT NULL DEFAULT 1
    ) DEFAULT CHARSET = utf8mb4"#,
    r#"CREATE TEMPORARY TABLE runners (
        id BIGINT PRIMARY KEY,
        telegram_id BIGINT,
        first_name VARCHAR(255) NOT NULL,
        last_name VARCHAR(255) NOT NULL,
        middle_name VARCHAR(255),
        gender VARCHAR(8),
        city VARCHAR(255),
        country VARCHAR(255),
        club_name VARCHAR(255)
    ) DEFAULT CHARSET = utf8mb4"#,
    r#"CREATE TEMPORARY TABLE results (
        id BIGINT PRIMARY KEY,
        race_id BIGINT NOT NULL,
        runner_id BIGINT NOT NULL,
        distance VARCHAR(64) NOT NULL,
        finish_time VARCHAR(16),
        finish_time_seconds BIGINT,
        pace VARCHAR(16),
        overall_place BIGINT,
        gender_place BIGINT,
        age_group VARCHAR(32),
        age_group_place BIGINT
    ) DEFAULT CHARSET = utf8mb4"#,
    r#"CREATE TEMPORARY TABLE clubs (
        id BIGINT PRIMARY KEY,
        name VARCHAR(255) NOT NULL
    ) DEFAULT CHARSET = utf8mb4"#,
    r#"CREATE TEMPORARY TABLE club_members (
        club_id BIGINT NOT NULL,
        runner_id BIGINT NOT NULL
    )"#,
];

const FIXTURES: [&str; 5] = [
    r#"INSERT INTO races (id, name, date, distances, is_active) VALUES
        (1, 'Весенний', '2025-04-12', '["5 км","10 км"]', 1),
        (2, 'Осенний', '2025-09-20', '["5 км","21 км"]', 0)"#,
    r#"INSERT INTO runners (id, telegram_id, first_name, last_name, city) VALUES
        (1, 123, 'Иван', 'Петров', 'Тула'),
        (2, 456, 'Анна', 'Смирнова', 'Москва'),
        (3, NULL, 'Пётр', 'Без Времени', NULL)"#,
    r#"INSERT INTO results (id, race_id, runner_id, distance, finish_time, finish_time_seconds, overall_place) VALUES
        (1, 1, 1, '10 км', '00:45:00', 2700, 4),
        (2, 2, 1, '21 км', '01:45:00', 6300, 9),
        (3, 1, 1, '5 км', '00:22:00', 1320, 3),
        (4, 2, 1, '5 км', '00:21:40', 1300, 2),
        (5, 1, 2, '5 км', '00:20:00', 1200, 1),
        (6, 2, 3, '5 км', NULL, NULL, NULL)"#,
    r#"INSERT INTO clubs (id, name) VALUES (1, 'Пустой'), (2, 'Сейдо')"#,
    r#"INSERT INTO club_members (club_id, runner_id) VALUES (2, 1), (2, 2)"#,
];

async fn seeded() -> Database {
    let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set");
    let db = Database::connect_lazy(&DatabaseSettings {
        target: ConnectionTarget::Url(url),
        max_connections: 1,
    })
    .unwrap();

    for statement in SCHEMA.into_iter().chain(FIXTURES) {
        sqlx::query(statement).execute(db.pool()).await.unwrap();
    }
    db
}

#[tokio::test]
#[ignore] // Only run when a MySQL 8 server is available
async fn test_mysql_statements() {
    let db = seeded().await;
    let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

    let upcoming = db.upcoming_races(today, 100).await.unwrap();
    assert!(upcoming.is_empty(), "inactive race must not be listed");

    let past = db.past_races(today, 50).await.unwrap();
    assert_eq!(past.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1]);

    let race = db.find_race("1").await.unwrap();
    assert_eq!(race.distances.as_deref(), Some(r#"["5 км","10 км"]"#));
    assert!(matches!(db.find_race("99").await, Err(StorageError::NotFound)));

    let results = db.race_results(1).await.unwrap();
    assert_eq!(results.iter().map(|r| r.result.id).collect::<Vec<_>>(), vec![5, 3, 1]);
    assert_eq!(results[0].last_name, "Смирнова");

    let history = db.runner_results("123").await.unwrap();
    assert_eq!(history.iter().map(|r| r.result.id).collect::<Vec<_>>(), vec![4, 2, 3, 1]);

    let bests = db.runner_bests("123").await.unwrap();
    let rows: Vec<(&str, Option<i64>, &str)> = bests
        .iter()
        .map(|b| (b.distance.as_str(), b.best_time_seconds, b.race_name.as_str()))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("5 км", Some(1300), "Осенний"),
            ("10 км", Some(2700), "Весенний"),
            ("21 км", Some(6300), "Осенний"),
        ]
    );
    assert_eq!(bests[0].best_time.as_deref(), Some("00:21:40"));

    let rating = db.rating("5 км", 50).await.unwrap();
    assert_eq!(rating.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 1]);
    assert_eq!(rating[1].best_time_seconds, 1300);
    assert_eq!(rating[1].races_count, 2);
    assert_eq!(rating[1].best_place, Some(2));
    assert_eq!(db.rating("5 км", 1).await.unwrap().len(), 1);

    let clubs = db.clubs().await.unwrap();
    let counts: Vec<(&str, i64)> = clubs
        .iter()
        .map(|c| (c.club.name.as_str(), c.members_count))
        .collect();
    assert_eq!(counts, vec![("Сейдо", 2), ("Пустой", 0)]);

    let club = db.find_club("2").await.unwrap();
    assert_eq!(db.club_members(club.id).await.unwrap().len(), 2);
}
