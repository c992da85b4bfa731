use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::listing::{CategoryFilter, CategoryOption, JobCatalog, JobPosting, OpenPositions};
use super::testimonials::{CarouselError, CarouselIndicator, Testimonial, TestimonialCarousel};

/// Read-only page content shared by every request.
#[derive(Debug, Clone)]
pub struct CareersContent {
    pub catalog: JobCatalog,
    pub carousel: TestimonialCarousel,
}

impl CareersContent {
    pub fn new(catalog: JobCatalog, carousel: TestimonialCarousel) -> Self {
        Self { catalog, carousel }
    }

    pub fn standard() -> Self {
        Self::new(JobCatalog::standard(), TestimonialCarousel::standard())
    }

    /// The positions section as a visitor sees it after picking `category`.
    pub fn positions(&self, category: Option<&str>) -> PositionsView {
        let mut section = OpenPositions::new(self.catalog.clone());
        if let Some(category) = category {
            section.select(CategoryFilter::parse(category));
        }

        PositionsView {
            categories: section.filter_bar(),
            selected: section.selected().clone(),
            positions: section.visible().into_iter().cloned().collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PositionsView {
    pub categories: Vec<CategoryOption>,
    pub selected: CategoryFilter,
    pub positions: Vec<JobPosting>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TestimonialView {
    pub index: usize,
    pub testimonial: Testimonial,
    pub indicators: Vec<CarouselIndicator>,
}

impl TestimonialView {
    fn from_carousel(carousel: &TestimonialCarousel) -> Self {
        Self {
            index: carousel.index(),
            testimonial: carousel.current().clone(),
            indicators: carousel.indicators(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PositionsQuery {
    #[serde(default)]
    category: Option<String>,
}

/// Read-only endpoints backing the careers page sections.
pub fn careers_router(content: Arc<CareersContent>) -> Router {
    Router::new()
        .route("/api/v1/careers/positions", get(positions_handler))
        .route("/api/v1/careers/testimonials", get(testimonials_handler))
        .route(
            "/api/v1/careers/testimonials/:index",
            get(testimonial_handler),
        )
        .with_state(content)
}

pub(crate) async fn positions_handler(
    State(content): State<Arc<CareersContent>>,
    Query(query): Query<PositionsQuery>,
) -> Response {
    let view = content.positions(query.category.as_deref());
    (StatusCode::OK, axum::Json(view)).into_response()
}

pub(crate) async fn testimonials_handler(State(content): State<Arc<CareersContent>>) -> Response {
    let payload = json!({
        "testimonials": content.carousel.testimonials(),
        "current": TestimonialView::from_carousel(&content.carousel),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn testimonial_handler(
    State(content): State<Arc<CareersContent>>,
    Path(index): Path<usize>,
) -> Response {
    let mut carousel = content.carousel.clone();
    let jumped = carousel.jump_to(index).map(|_| ());
    match jumped {
        Ok(()) => {
            let view = TestimonialView::from_carousel(&carousel);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(err @ CarouselError::OutOfRange { .. }) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
