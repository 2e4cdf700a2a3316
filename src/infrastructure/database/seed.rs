//! Sample data for demos and tests
//!
//! Rows are inserted in a fixed order, so auto-increment ids are `1..=n`
//! in the order listed below.

use chrono::{Duration, Utc};
use sea_orm::{ActiveValue::NotSet, ConnectionTrait, DbErr, EntityTrait, Set};
use tracing::info;

use super::entities::{comment, community, post, user};

const USERS: [(&str, &str); 9] = [
    ("Ilia", "kumi@gmail.com"),
    ("Kamaru", "nightmare@gmail.com"),
    ("Israel", "the_last_stylebender@gmail.com"),
    ("Alex", "poatan@gmail.com"),
    ("Tony", "el_cucuy@gmail.com"),
    ("Charles", "do_bronx@gmail.com"),
    ("Alex", "the_great@gmail.com"),
    ("Anderson", "spider@gmail.com"),
    ("Jon", "goat@gmail.com"),
];

// (name, description, owner_id)
const COMMUNITIES: [(&str, &str, i32); 9] = [
    ("MMA Community", "Merab THE GOAT", 1),
    ("Alex Pereira Training Sessions", "CHAMA", 4),
    (
        "C# Masterclass",
        "This is the best C# community to learn this prog language",
        5,
    ),
    (
        "Culinary community",
        "Interested in cooking? Let's cook with Volk!",
        7,
    ),
    (
        "Striking masterclass",
        "Learn Israel's question mark kicks within 5 minutes!",
        3,
    ),
    ("GOAT community", "Jon Jones teaches us how to become the best!", 9),
    ("Head movement community", "Learn how to become Neo with Spider", 8),
    ("Muay Thai", "OOOooooooOoooooooowwweeeeeeeeeeeee", 1),
    ("Networking Community", "Cisco", 1),
];

// (title, content, author_id, community_id)
const POSTS: [(&str, &str, i32, i32); 6] = [
    ("Wrestling drills", "Chain wrestling for the whole round.", 2, 1),
    ("Leg kick defence", "Check early, check often.", 4, 2),
    ("Async in C#", "await all the things", 5, 3),
    ("Borscht", "Beets first, then everything else.", 7, 4),
    ("Question mark kick", "Feint the body, land the head.", 3, 5),
    ("Subnetting 101", "A /24 holds 254 hosts.", 1, 9),
];

// (content, author_id, post_id)
const COMMENTS: [(&str, i32, i32); 8] = [
    ("Cardio is the answer.", 1, 1),
    ("Merab approves.", 9, 1),
    ("Chama!", 4, 2),
    ("Does it work with tasks?", 6, 3),
    ("Looks tasty.", 5, 4),
    ("Too fast to see.", 8, 5),
    ("Tried it, fell over.", 2, 5),
    ("What about IPv6?", 3, 6),
];

pub async fn seed_users<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let models = USERS.iter().map(|(name, email)| user::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        email: Set(email.to_string()),
    });
    user::Entity::insert_many(models).exec(db).await?;
    Ok(())
}

/// Requires [`seed_users`] first; owners are foreign keys.
pub async fn seed_communities<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let models = COMMUNITIES
        .iter()
        .map(|(name, description, owner_id)| community::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            description: Set(Some(description.to_string())),
            owner_id: Set(*owner_id),
        });
    community::Entity::insert_many(models).exec(db).await?;
    Ok(())
}

/// Requires users and communities.
pub async fn seed_posts<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let base = Utc::now();
    let models = POSTS
        .iter()
        .enumerate()
        .map(|(i, (title, content, author_id, community_id))| post::ActiveModel {
            id: NotSet,
            title: Set(title.to_string()),
            content: Set(content.to_string()),
            author_id: Set(*author_id),
            community_id: Set(*community_id),
            created_at: Set(base + Duration::minutes(i as i64)),
        });
    post::Entity::insert_many(models).exec(db).await?;
    Ok(())
}

/// Requires users and posts.
pub async fn seed_comments<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let base = Utc::now();
    let models = COMMENTS
        .iter()
        .enumerate()
        .map(|(i, (content, author_id, post_id))| comment::ActiveModel {
            id: NotSet,
            content: Set(content.to_string()),
            author_id: Set(*author_id),
            post_id: Set(*post_id),
            created_at: Set(base + Duration::minutes(i as i64)),
        });
    comment::Entity::insert_many(models).exec(db).await?;
    Ok(())
}

/// Seed every table in dependency order.
pub async fn seed_all<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    seed_users(db).await?;
    seed_communities(db).await?;
    seed_posts(db).await?;
    seed_comments(db).await?;

    info!(
        users = USERS.len(),
        communities = COMMUNITIES.len(),
        posts = POSTS.len(),
        comments = COMMENTS.len(),
        "Sample data seeded"
    );
    Ok(())
}
