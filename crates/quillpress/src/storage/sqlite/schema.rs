//! SQLite schema definitions and SQL query constants.
//!
//! All SQL used by the SQLite repository lives here as pure data.
//! The schema defines six tables. Only `posts` and the `admin_users` seed
//! are reachable from any route; `categories`, `post_categories`,
//! `comments`, and `likes` are scaffolding the routes never touch.

/// SQL statement to create all tables. Safe to run on every startup.
pub const CREATE_TABLES: &str = r#"
-- Posts table
CREATE TABLE IF NOT EXISTS posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    filename TEXT,
    date_created TEXT NOT NULL,
    views INTEGER DEFAULT 0,
    pinned INTEGER DEFAULT 0
);

-- Categories table
CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT UNIQUE NOT NULL
);

-- Post/category join table
CREATE TABLE IF NOT EXISTS post_categories (
    post_id INTEGER,
    category_id INTEGER,
    FOREIGN KEY (post_id) REFERENCES posts(id),
    FOREIGN KEY (category_id) REFERENCES categories(id)
);

-- Comments table
CREATE TABLE IF NOT EXISTS comments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    post_id INTEGER NOT NULL,
    username TEXT NOT NULL,
    content TEXT NOT NULL,
    date_created TEXT NOT NULL,
    FOREIGN KEY (post_id) REFERENCES posts(id)
);

-- Likes table
CREATE TABLE IF NOT EXISTS likes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    post_id INTEGER NOT NULL,
    user_ip TEXT NOT NULL,
    FOREIGN KEY (post_id) REFERENCES posts(id)
);

-- Administrator accounts table
CREATE TABLE IF NOT EXISTS admin_users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT UNIQUE NOT NULL,
    password TEXT NOT NULL
);
"#;

// Post queries
pub const INSERT_POST: &str = r#"
INSERT INTO posts (title, content, filename, date_created)
VALUES (?1, ?2, ?3, ?4)
"#;

pub const SELECT_POST_BY_ID: &str = r#"
SELECT id, title, content, filename, date_created, views, pinned
FROM posts
WHERE id = ?1
"#;

pub const SELECT_POSTS_DESC: &str = r#"
SELECT id, title, content, filename, date_created, views, pinned
FROM posts
ORDER BY id DESC
"#;

pub const UPDATE_POST: &str = r#"
UPDATE posts
SET title = ?2, content = ?3, filename = ?4
WHERE id = ?1
"#;

pub const DELETE_POST: &str = r#"
DELETE FROM posts
WHERE id = ?1
"#;

// Admin seed queries
pub const COUNT_ADMIN_USERS: &str = r#"
SELECT COUNT(*) FROM admin_users
"#;

pub const SEED_ADMIN_USER: &str = r#"
INSERT INTO admin_users (username, password)
VALUES (?1, ?2)
"#;
