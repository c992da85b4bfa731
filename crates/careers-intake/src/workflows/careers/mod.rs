//! Careers page workflows: open positions, application intake, and team testimonials.

pub mod applications;
mod content;
pub mod listing;
pub mod router;
pub mod testimonials;

pub use listing::{
    visible_jobs, CatalogError, CategoryFilter, CategoryOption, JobCatalog, JobId, JobPosting,
    OpenPositions, ALL_CATEGORIES,
};
pub use router::{careers_router, CareersContent, PositionsView, TestimonialView};
pub use testimonials::{CarouselError, CarouselIndicator, Testimonial, TestimonialCarousel};
