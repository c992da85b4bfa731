use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::content::standard_testimonials;

/// A team member quote shown in the "What Our Team Says" carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub tenure: String,
    pub quote: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    #[error("a carousel needs at least one testimonial")]
    Empty,
    #[error("testimonial {index} is out of range for {len} entries")]
    OutOfRange { index: usize, len: usize },
}

/// Navigation dot for one slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CarouselIndicator {
    pub position: usize,
    pub active: bool,
}

/// Cyclic cursor over a fixed, non-empty list of testimonials.
///
/// The index always satisfies `index < testimonial_count()`; stepping past
/// either end wraps around.
#[derive(Debug, Clone)]
pub struct TestimonialCarousel {
    testimonials: Arc<[Testimonial]>,
    index: usize,
}

impl TestimonialCarousel {
    pub fn new(testimonials: impl Into<Arc<[Testimonial]>>) -> Result<Self, CarouselError> {
        let testimonials = testimonials.into();
        if testimonials.is_empty() {
            return Err(CarouselError::Empty);
        }

        Ok(Self {
            testimonials,
            index: 0,
        })
    }

    pub fn standard() -> Self {
        Self {
            testimonials: standard_testimonials().into(),
            index: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn testimonial_count(&self) -> usize {
        self.testimonials.len()
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    pub fn current(&self) -> &Testimonial {
        &self.testimonials[self.index]
    }

    pub fn next(&mut self) -> &Testimonial {
        self.index = (self.index + 1) % self.testimonial_count();
        self.current()
    }

    pub fn previous(&mut self) -> &Testimonial {
        let len = self.testimonial_count();
        self.index = (self.index + len - 1) % len;
        self.current()
    }

    /// Jump straight to a slide. Out-of-range positions leave the cursor untouched.
    pub fn jump_to(&mut self, index: usize) -> Result<&Testimonial, CarouselError> {
        let len = self.testimonial_count();
        if index >= len {
            return Err(CarouselError::OutOfRange { index, len });
        }

        self.index = index;
        Ok(self.current())
    }

    pub fn indicators(&self) -> Vec<CarouselIndicator> {
        (0..self.testimonial_count())
            .map(|position| CarouselIndicator {
                position,
                active: position == self.index,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn testimonial(name: &str) -> Testimonial {
        Testimonial {
            name: name.to_string(),
            role: "Engineer".to_string(),
            tenure: "1 year at WMSols".to_string(),
            quote: "Great team.".to_string(),
            image: String::new(),
        }
    }

    fn carousel_of(len: usize) -> TestimonialCarousel {
        let list: Vec<Testimonial> = (0..len).map(|i| testimonial(&format!("t{i}"))).collect();
        TestimonialCarousel::new(list).expect("non-empty carousel")
    }

    #[test]
    fn standard_carousel_starts_on_first_testimonial() {
        let carousel = TestimonialCarousel::standard();
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.testimonial_count(), 3);
        assert_eq!(carousel.current().name, "Sarah Ahmed");
    }

    #[test]
    fn wraps_in_both_directions() {
        let mut carousel = TestimonialCarousel::standard();
        assert_eq!(carousel.previous().name, "Fatima Malik");
        assert_eq!(carousel.index(), 2);
        assert_eq!(carousel.next().name, "Sarah Ahmed");
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn single_entry_carousel_stays_put() {
        let mut carousel = carousel_of(1);
        carousel.next();
        carousel.previous();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn empty_list_is_rejected() {
        assert_eq!(
            TestimonialCarousel::new(Vec::<Testimonial>::new()).err(),
            Some(CarouselError::Empty)
        );
    }

    #[test]
    fn jump_to_out_of_range_keeps_index() {
        let mut carousel = TestimonialCarousel::standard();
        carousel.jump_to(1).expect("in range");
        assert_eq!(
            carousel.jump_to(3).err(),
            Some(CarouselError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn indicators_mark_only_the_current_slide() {
        let mut carousel = TestimonialCarousel::standard();
        carousel.jump_to(2).expect("in range");
        let active: Vec<usize> = carousel
            .indicators()
            .iter()
            .filter(|dot| dot.active)
            .map(|dot| dot.position)
            .collect();
        assert_eq!(active, vec![2]);
    }

    proptest! {
        #[test]
        fn prop_next_n_times_is_identity(len in 1usize..16, start in 0usize..16) {
            let mut carousel = carousel_of(len);
            let start = start % len;
            carousel.jump_to(start).expect("in range");
            for _ in 0..len {
                carousel.next();
            }
            prop_assert_eq!(carousel.index(), start);
        }

        #[test]
        fn prop_previous_n_times_is_identity(len in 1usize..16, start in 0usize..16) {
            let mut carousel = carousel_of(len);
            let start = start % len;
            carousel.jump_to(start).expect("in range");
            for _ in 0..len {
                carousel.previous();
            }
            prop_assert_eq!(carousel.index(), start);
        }

        #[test]
        fn prop_next_then_previous_is_identity(len in 1usize..16, start in 0usize..16) {
            let mut carousel = carousel_of(len);
            let start = start % len;
            carousel.jump_to(start).expect("in range");
            carousel.next();
            carousel.previous();
            prop_assert_eq!(carousel.index(), start);
            prop_assert!(carousel.index() < carousel.testimonial_count());
        }
    }
}
