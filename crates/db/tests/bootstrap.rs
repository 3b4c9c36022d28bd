use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    cinedex_db::health_check(&pool).await.unwrap();
    assert!(cinedex_db::catalog_ready(&pool).await.unwrap());

    for table in ["movies", "genre"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Both foreign keys are declared on the raw columns.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_foreign_keys_exist(pool: PgPool) {
    let names: Vec<(String,)> = sqlx::query_as(
        "SELECT constraint_name::text FROM information_schema.table_constraints
         WHERE constraint_type = 'FOREIGN KEY' AND table_name IN ('movies', 'genre')
         ORDER BY constraint_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    let names: Vec<&str> = names.iter().map(|(n,)| n.as_str()).collect();
    assert_eq!(names, ["fk_genre_movies", "fk_movies_genre_id"]);
}

/// A reachable but unmigrated database is not ready.
#[sqlx::test(migrations = false)]
async fn test_catalog_not_ready_without_migrations(pool: PgPool) {
    cinedex_db::health_check(&pool).await.unwrap();
    assert!(!cinedex_db::catalog_ready(&pool).await.unwrap());
}
