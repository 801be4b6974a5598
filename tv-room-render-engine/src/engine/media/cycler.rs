use crate::engine::core::error::SceneError;

/// Fixed, non-empty list of media sources with a cursor that wraps around.
///
/// The cursor is always a valid index: construction rejects empty lists and
/// [`MediaCycler::advance`] steps modulo the length.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaCycler<T> {
    name: &'static str,
    sources: Vec<T>,
    current_index: usize,
}

impl<T> MediaCycler<T> {
    pub fn new(name: &'static str, sources: impl IntoIterator<Item = T>) -> Result<Self, SceneError> {
        let sources: Vec<T> = sources.into_iter().collect();
        if sources.is_empty() {
            return Err(SceneError::EmptyCycler { name });
        }

        Ok(Self {
            name,
            sources,
            current_index: 0,
        })
    }

    /// Move to the next source, wrapping after the last one, and return it.
    pub fn advance(&mut self) -> &T {
        self.current_index = (self.current_index + 1) % self.sources.len();
        &self.sources[self.current_index]
    }

    pub fn current(&self) -> &T {
        &self.sources[self.current_index]
    }

    pub fn index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn sources(&self) -> &[T] {
        &self.sources
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_list_is_rejected() {
        let err = MediaCycler::<&str>::new("music", []).unwrap_err();
        assert_eq!(err, SceneError::EmptyCycler { name: "music" });
    }

    #[test]
    fn advancing_len_times_returns_to_start() {
        for len in 1..=6 {
            let mut cycler = MediaCycler::new("test", 0..len).unwrap();
            let start = *cycler.current();
            for _ in 0..len {
                cycler.advance();
            }
            assert_eq!(*cycler.current(), start, "len {len}");
            assert_eq!(cycler.index(), 0);
        }
    }

    #[test]
    fn each_advance_moves_exactly_one_step() {
        let mut cycler = MediaCycler::new("test", ["a", "b", "c", "d"]).unwrap();
        for step in 1..=10 {
            let before = cycler.index();
            cycler.advance();
            assert_eq!(cycler.index(), (before + 1) % 4, "step {step}");
        }
    }

    #[test]
    fn single_source_advances_to_itself() {
        let mut cycler = MediaCycler::new("solo", ["only.mp3"]).unwrap();
        assert_eq!(*cycler.advance(), "only.mp3");
        assert_eq!(cycler.index(), 0);
    }

    #[test]
    fn reports_its_name_and_size() {
        let cycler = MediaCycler::new("screen images", ["a.jpg", "b.jpg", "c.jpg"]).unwrap();
        assert_eq!(cycler.name(), "screen images");
        assert_eq!(cycler.len(), 3);
        assert_eq!(cycler.sources(), ["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn advance_returns_the_new_current_source() {
        let mut cycler = MediaCycler::new("music", ["A", "B", "C"]).unwrap();
        assert_eq!(*cycler.advance(), "B");
        assert_eq!(*cycler.current(), "B");
        assert_eq!(*cycler.advance(), "C");
        assert_eq!(*cycler.advance(), "A");
    }
}
