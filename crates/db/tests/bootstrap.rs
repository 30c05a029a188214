use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    // Health check
    commhub_db::health_check(&pool).await.unwrap();

    // Verify every table exists and starts empty.
    let tables = [
        "users",
        "admins",
        "submissions",
        "image_metadata",
        "video_metadata",
        "audio_metadata",
        "web_data",
        "comments",
        "notifications",
        "validation_queue",
        "admin_actions",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}
