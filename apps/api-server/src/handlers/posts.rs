//! Blog post resource handlers.

use actix_web::{HttpResponse, http::header, web};
use uuid::Uuid;

use blog_core::domain::{Author, BlogPost, NewPost, PostPatch};
use blog_shared::dto::{AuthorDto, CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let post = state.posts.get(id).await?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let title = req.title.ok_or_else(|| missing_field("title"))?;
    let content = req.content.ok_or_else(|| missing_field("content"))?;
    let author = req.author.ok_or_else(|| missing_field("author"))?;

    let post = state
        .posts
        .create(NewPost {
            title,
            content,
            author: author_from_dto(author),
        })
        .await?;

    tracing::debug!(request_id = request_id.as_str(), post_id = %post.id, "POST /posts");

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/posts/{}", post.id)))
        .json(to_response(post)))
}

/// PUT /posts/{id}
///
/// A body `id`, when sent, must name the same UUID as the path id.
pub async fn update_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let req = body.into_inner();

    if let Some(body_id) = req.id.as_deref() {
        if Uuid::parse_str(body_id).ok() != Some(id) {
            return Err(AppError::BadRequest(format!(
                "Request path id ({}) and request body id ({}) must match",
                id, body_id
            )));
        }
    }

    let patch = PostPatch {
        title: req.title,
        content: req.content,
        author: req.author.map(author_from_dto),
    };

    state.posts.update(id, patch).await?;
    tracing::debug!(request_id = request_id.as_str(), post_id = %id, "PUT /posts");

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    state.posts.delete(id).await?;
    tracing::debug!(request_id = request_id.as_str(), post_id = %id, "DELETE /posts");

    Ok(HttpResponse::NoContent().finish())
}

/// An id that is not a UUID cannot name a stored post.
fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::NotFound(format!("BlogPost with id {} not found", raw)))
}

fn missing_field(field: &str) -> AppError {
    AppError::BadRequest(format!("Missing `{}` in request body", field))
}

fn to_response(post: BlogPost) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title,
        content: post.content,
        author: AuthorDto {
            first_name: post.author.first_name,
            last_name: post.author.last_name,
        },
        created: post.created.to_rfc3339(),
    }
}

fn author_from_dto(dto: AuthorDto) -> Author {
    Author {
        first_name: dto.first_name,
        last_name: dto.last_name,
    }
}
