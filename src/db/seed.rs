//! Bundled starter data for an empty database.

use sqlx::{Row, SqlitePool};

/// (id, type)
const CATEGORIES: &[(i64, &str)] = &[
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

/// (id, question, answer, category, difficulty)
const QUESTIONS: &[(i64, &str, &str, i64, i64)] = &[
    (2, "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
    (4, "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 5, 4),
    (5, "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
    (6, "What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 5, 3),
    (9, "What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
    (10, "Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3),
    (11, "Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
    (12, "Who invented Peanut Butter?", "George Washington Carver", 4, 2),
    (13, "What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    (14, "In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    (15, "The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    (16, "Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 2, 1),
    (17, "La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    (18, "How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
    (19, "Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?", "Jackson Pollock", 2, 2),
    (20, "What is the heaviest organ in the human body?", "The Liver", 1, 4),
    (21, "Who discovered penicillin?", "Alexander Fleming", 1, 3),
    (22, "Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
    (23, "Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
];

/// Load the bundled categories and questions into whichever tables are empty.
///
/// Returns the number of rows inserted.
pub async fn seed_defaults(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0;

    let categories: i64 = sqlx::query("SELECT COUNT(*) AS n FROM categories")
        .fetch_one(&mut *tx)
        .await?
        .get("n");

    if categories == 0 {
        for (id, kind) in CATEGORIES {
            inserted += sqlx::query("INSERT INTO categories (id, type) VALUES (?, ?)")
                .bind(*id)
                .bind(*kind)
                .execute(&mut *tx)
                .await?
                .rows_affected();
        }
    }

    let questions: i64 = sqlx::query("SELECT COUNT(*) AS n FROM questions")
        .fetch_one(&mut *tx)
        .await?
        .get("n");

    if questions == 0 {
        for (id, question, answer, category, difficulty) in QUESTIONS {
            inserted += sqlx::query(
                "INSERT INTO questions (id, question, answer, category, difficulty) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(*id)
            .bind(*question)
            .bind(*answer)
            .bind(*category)
            .bind(*difficulty)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }
    }

    tx.commit().await?;

    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_database;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_seed_only_fills_empty_tables() {
        let temp_dir = TempDir::new().unwrap();
        let pool = init_database(&temp_dir.path().join("seed.sqlite"))
            .await
            .unwrap();

        let first = seed_defaults(&pool).await.unwrap();
        assert_eq!(first as usize, CATEGORIES.len() + QUESTIONS.len());

        let second = seed_defaults(&pool).await.unwrap();
        assert_eq!(second, 0);
    }
}
