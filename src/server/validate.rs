//! Request input validation.
//!
//! Each validator trims the incoming text fields, collects every failing
//! field rather than stopping at the first, and returns the cleaned input
//! on success so handlers never persist untrimmed values.

use chrono::{Datelike, Utc};

use crate::{
    model::{
        auth::RegisterDto,
        book::BookInputDto,
        review::{CreateReviewDto, UpdateReviewDto},
    },
    server::error::validation::{FieldError, ValidationError},
};

const TITLE_MAX: usize = 200;
const AUTHOR_MAX: usize = 100;
const DESCRIPTION_MIN: usize = 10;
const DESCRIPTION_MAX: usize = 1000;
const GENRE_MAX: usize = 50;
const YEAR_MIN: i32 = 1000;

const NAME_MAX: usize = 100;
const EMAIL_MAX: usize = 254;
const PASSWORD_MIN: usize = 8;

const REVIEW_TEXT_MIN: usize = 10;
const REVIEW_TEXT_MAX: usize = 500;
pub const RATING_MIN: i32 = 1;
pub const RATING_MAX: i32 = 5;

/// Validates a registration request, returning it with name and email
/// trimmed. Email case is normalized later, at the service layer.
pub fn register(input: RegisterDto) -> Result<RegisterDto, ValidationError> {
    let mut errors = Vec::new();

    let name = input.name.trim().to_string();
    let email = input.email.trim().to_string();

    require_text(&mut errors, "name", &name, 1, NAME_MAX);
    require_text(&mut errors, "email", &email, 3, EMAIL_MAX);

    if !email.is_empty() && !email.contains('@') {
        errors.push(FieldError {
            field: "email",
            message: "email must be a valid email address".to_string(),
        });
    }

    if input.password.chars().count() < PASSWORD_MIN {
        errors.push(FieldError {
            field: "password",
            message: format!("password must be at least {PASSWORD_MIN} characters"),
        });
    }

    if !errors.is_empty() {
        return Err(ValidationError { errors });
    }

    Ok(RegisterDto {
        name,
        email,
        password: input.password,
    })
}

/// Validates a book create or update request, returning it with all text
/// fields trimmed.
pub fn book_input(input: BookInputDto) -> Result<BookInputDto, ValidationError> {
    let mut errors = Vec::new();

    let title = input.title.trim().to_string();
    let author = input.author.trim().to_string();
    let description = input.description.trim().to_string();
    let genre = input.genre.trim().to_string();

    require_text(&mut errors, "title", &title, 1, TITLE_MAX);
    require_text(&mut errors, "author", &author, 1, AUTHOR_MAX);
    require_text(
        &mut errors,
        "description",
        &description,
        DESCRIPTION_MIN,
        DESCRIPTION_MAX,
    );
    require_text(&mut errors, "genre", &genre, 1, GENRE_MAX);

    let current_year = Utc::now().year();
    if input.year < YEAR_MIN || input.year > current_year {
        errors.push(FieldError {
            field: "year",
            message: format!("year must be between {YEAR_MIN} and {current_year}"),
        });
    }

    if !errors.is_empty() {
        return Err(ValidationError { errors });
    }

    Ok(BookInputDto {
        title,
        author,
        description,
        genre,
        year: input.year,
    })
}

/// Validates a review creation request, returning it with the text trimmed.
pub fn create_review(input: CreateReviewDto) -> Result<CreateReviewDto, ValidationError> {
    let review_text = review_fields(input.rating, &input.review_text)?;

    Ok(CreateReviewDto {
        book_id: input.book_id,
        rating: input.rating,
        review_text,
    })
}

/// Validates a review update request, returning it with the text trimmed.
pub fn update_review(input: UpdateReviewDto) -> Result<UpdateReviewDto, ValidationError> {
    let review_text = review_fields(input.rating, &input.review_text)?;

    Ok(UpdateReviewDto {
        rating: input.rating,
        review_text,
    })
}

fn review_fields(rating: i32, review_text: &str) -> Result<String, ValidationError> {
    let mut errors = Vec::new();

    let review_text = review_text.trim().to_string();

    if !(RATING_MIN..=RATING_MAX).contains(&rating) {
        errors.push(FieldError {
            field: "rating",
            message: format!("rating must be an integer between {RATING_MIN} and {RATING_MAX}"),
        });
    }

    require_text(
        &mut errors,
        "reviewText",
        &review_text,
        REVIEW_TEXT_MIN,
        REVIEW_TEXT_MAX,
    );

    if !errors.is_empty() {
        return Err(ValidationError { errors });
    }

    Ok(review_text)
}

/// Records an error when a trimmed text field falls outside its length
/// bounds. Character counts, not bytes.
fn require_text(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) {
    let len = value.chars().count();

    if len < min {
        let message = if min == 1 {
            format!("{field} is required")
        } else {
            format!("{field} must be at least {min} characters")
        };
        errors.push(FieldError { field, message });
    } else if len > max {
        errors.push(FieldError {
            field,
            message: format!("{field} must be at most {max} characters"),
        });
    }
}
