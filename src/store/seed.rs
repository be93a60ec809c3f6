//! Built-in sample data

use chrono::{Duration, Utc};

use super::Store;
use crate::models::{Activity, ActivityType, Book, Shelf, User};

const BESTSELLER_LIST: &str = "Combined Print & E-Book Fiction";
const BESTSELLER_LIST_ENCODED: &str = "combined-print-and-e-book-fiction";

impl Store {
    /// Build the store from the built-in sample data.
    ///
    /// The sample data satisfies every invariant checked by [`Store::validate`],
    /// so this cannot fail. Activity timestamps are relative to the call.
    pub fn seed() -> Self {
        Self {
            books: seed_books(),
            users: seed_users(),
            shelves: seed_shelves(),
            activities: seed_activities(),
        }
    }
}

fn book(id: &str, title: &str, description: &str, author: &str, publisher: &str) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        book_image_url: format!("https://static01.nyt.com/bestsellers/images/{}.jpg", id),
        author: author.to_string(),
        publisher: publisher.to_string(),
        list_name: BESTSELLER_LIST.to_string(),
        list_name_encoded: BESTSELLER_LIST_ENCODED.to_string(),
        created_at: Utc::now(),
        updated_at: None,
    }
}

fn seed_books() -> Vec<Book> {
    vec![
        book(
            "9780385548984",
            "THE WIDOW",
            "When Simon Latch, a lawyer in rural Virginia, is accused of murder, he goes in search of the real killer.",
            "John Grisham",
            "Doubleday",
        ),
        book(
            "9780385546898",
            "THE SECRET OF SECRETS",
            "As he searches for the missing noetic scientist he has been seeing, Robert Langdon discovers something regarding a secret project.",
            "Dan Brown",
            "Doubleday",
        ),
        book(
            "9781464257872",
            "MURDER AT HOLLY HOUSE",
            "When a dead stranger is found in a Yorkshire chimney around the holidays in 1952, Inspector Frank Grasby gets assigned the case.",
            "Denzil Meyrick",
            "Poisoned Pen",
        ),
        book(
            "9780593312032",
            "CAMINO GHOSTS",
            "A diverse cast of characters including a lawyer, a judge, and a group of locals navigate mysteries and secrets on a small Florida island.",
            "John Grisham",
            "Doubleday",
        ),
        book(
            "9780062457936",
            "FOURTH WING",
            "A young woman discovers a hidden world of dragons and must learn to survive in a dangerous academy.",
            "Rebecca Yarros",
            "Entangled Publishing",
        ),
    ]
}

fn user(
    id: &str,
    username: &str,
    display_name: &str,
    avatar: &str,
    slug: &str,
    location: &str,
) -> User {
    User {
        id: id.to_string(),
        username: username.to_string(),
        display_name: display_name.to_string(),
        avatar_url: format!("https://images.gr-assets.com/users/{}p6/{}.jpg", avatar, id),
        profile_url: format!("https://www.goodreads.com/user/show/{}-{}", id, slug),
        location: Some(location.to_string()),
        email: None,
        created_at: Utc::now(),
        updated_at: None,
    }
}

fn seed_users() -> Vec<User> {
    vec![
        user("5813019", "ElizaLu", "ElizaLu", "1483760406", "elizalu", "Chicago, IL"),
        user(
            "3906820",
            "Vidya",
            "Vidya-BooksAreMagic",
            "1390203697",
            "vidya-booksaremagic",
            "Bengaluru, IN",
        ),
        user("279256", "Diane", "Diane", "1497365060", "diane", "New York, NY"),
        user("97027921", "AMANDA", "AMANDA", "1739514128", "amanda", "Toronto, Canada"),
        user(
            "4271946",
            "jessica-woodbury",
            "Jessica Woodbury",
            "1415105097",
            "jessica-woodbury",
            "Chicago, IL",
        ),
    ]
}

fn seed_shelves() -> Vec<Shelf> {
    [
        ("fantasy", "fantasy", 19_025_085, true),
        ("fiction", "fiction", 18_382_588, true),
        ("romance", "romance", 13_684_190, true),
        ("young adult", "young-adult", 6_531_774, true),
        ("mystery", "mystery", 6_381_166, true),
        ("classics", "classics", 5_722_671, true),
        ("audiobook", "audiobook", 5_092_943, false),
        ("horror", "horror", 3_533_412, true),
        ("thriller", "thriller", 2_742_118, true),
        ("coming-of-age", "coming-of-age", 341_822, false),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, slug, count, is_curated), id)| Shelf {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
        count,
        is_curated,
        created_at: Utc::now(),
        updated_at: None,
    })
    .collect()
}

fn seed_activities() -> Vec<Activity> {
    let now = Utc::now();

    let activity = |id: &str,
                    user_id: &str,
                    activity_type: ActivityType,
                    rating: Option<&str>,
                    content: &str,
                    book_id: &str,
                    age: Duration| Activity {
        id: id.to_string(),
        user_id: user_id.to_string(),
        activity_type,
        rating: rating.map(str::to_string),
        activity_content: content.to_string(),
        book_id: Some(book_id.to_string()),
        timestamp: now - age,
        created_at: now,
    };

    vec![
        activity(
            "act-1",
            "5813019",
            ActivityType::Rated,
            Some("5"),
            "ElizaLu rated The Widow 5 stars",
            "9780385548984",
            Duration::days(2),
        ),
        activity(
            "act-2",
            "3906820",
            ActivityType::Read,
            Some("4"),
            "Vidya finished reading The Secret of Secrets",
            "9780385546898",
            Duration::days(1),
        ),
        activity(
            "act-3",
            "279256",
            ActivityType::Rated,
            Some("4"),
            "Diane rated Murder at Holly House 4 stars",
            "9781464257872",
            Duration::zero(),
        ),
        activity(
            "act-4",
            "97027921",
            ActivityType::Read,
            None,
            "AMANDA is currently reading Camino Ghosts",
            "9780593312032",
            Duration::hours(3),
        ),
        activity(
            "act-5",
            "4271946",
            ActivityType::Rated,
            Some("5"),
            "Jessica Woodbury rated Fourth Wing 5 stars",
            "9780062457936",
            Duration::hours(6),
        ),
    ]
}
