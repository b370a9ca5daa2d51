use yew::Callback;

use crate::model::{Horizontal, Slide, Vertical};

/// User callbacks, one per axis. Either may be absent; the tracker still
/// counts the axis as fired for the segment.
#[derive(Clone, Default, PartialEq)]
pub struct SlideHandlers {
    pub on_slide_x: Option<Callback<Horizontal>>,
    pub on_slide_y: Option<Callback<Vertical>>,
}

impl SlideHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_slide_x(mut self, cb: impl Into<Callback<Horizontal>>) -> Self {
        self.on_slide_x = Some(cb.into());
        self
    }

    pub fn on_slide_y(mut self, cb: impl Into<Callback<Vertical>>) -> Self {
        self.on_slide_y = Some(cb.into());
        self
    }

    /// Runs the callbacks for whichever axes fired, X first.
    pub fn emit(&self, slide: Slide) {
        if let (Some(dir), Some(cb)) = (slide.x, &self.on_slide_x) {
            cb.emit(dir);
        }
        if let (Some(dir), Some(cb)) = (slide.y, &self.on_slide_y) {
            cb.emit(dir);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn emits_x_before_y() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let handlers = {
            let sx = seen.clone();
            let sy = seen.clone();
            SlideHandlers::new()
                .on_slide_x(move |d: Horizontal| sx.borrow_mut().push(d.as_str()))
                .on_slide_y(move |d: Vertical| sy.borrow_mut().push(d.as_str()))
        };
        handlers.emit(Slide {
            x: Some(Horizontal::Right),
            y: Some(Vertical::Up),
        });
        handlers.emit(Slide::NONE);
        assert_eq!(*seen.borrow(), vec!["right", "up"]);
    }

    #[test]
    fn missing_callback_is_skipped() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let handlers = {
            let sy = seen.clone();
            SlideHandlers::new().on_slide_y(move |d: Vertical| sy.borrow_mut().push(d))
        };
        handlers.emit(Slide {
            x: Some(Horizontal::Left),
            y: Some(Vertical::Down),
        });
        assert_eq!(*seen.borrow(), vec![Vertical::Down]);
    }
}
