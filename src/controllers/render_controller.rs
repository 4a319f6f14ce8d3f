use std::path::Path;
use std::time::Instant;

use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::actions::render_frame::render_frame::render;
use crate::core::data::canvas_dimensions::CanvasDimensions;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_config::RenderConfig;
use crate::core::errors::InvalidConfigError;

/// Renders frames on request and hands the latest one to a file presenter.
pub struct RenderController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> RenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(
        &mut self,
        config: &RenderConfig,
        dims: CanvasDimensions,
    ) -> Result<(), InvalidConfigError> {
        tracing::info!(
            variant = %config.variant,
            scheme = %config.colour_scheme,
            max_iterations = config.max_iterations,
            "rendering {}x{} frame",
            dims.width(),
            dims.height()
        );

        let start = Instant::now();
        let buffer = render(config, dims)?;

        tracing::info!(duration = ?start.elapsed(), "render finished");

        self.buffer = Some(buffer);
        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), PresentError> {
        let buffer = self.buffer.as_ref().ok_or(PresentError::NothingRendered)?;
        self.presenter.present(buffer, filepath.as_ref())?;

        tracing::info!(path = %filepath.as_ref().display(), "frame written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingPresenter {
        presented: RefCell<Vec<(PathBuf, usize)>>,
    }

    impl FilePresenterPort for &RecordingPresenter {
        fn present(
            &self,
            buffer: &PixelBuffer,
            filepath: impl AsRef<Path>,
        ) -> Result<(), PresentError> {
            self.presented
                .borrow_mut()
                .push((filepath.as_ref().to_path_buf(), buffer.buffer_size()));
            Ok(())
        }
    }

    #[test]
    fn test_write_before_generate_fails() {
        let presenter = RecordingPresenter::default();
        let controller = RenderController::new(&presenter);

        let result = controller.write("unused.png");

        assert!(matches!(result, Err(PresentError::NothingRendered)));
        assert!(presenter.presented.borrow().is_empty());
    }

    #[test]
    fn test_generate_then_write_presents_frame() {
        let presenter = RecordingPresenter::default();
        let mut controller = RenderController::new(&presenter);
        let dims = CanvasDimensions::new(8, 6).unwrap();

        controller.generate(&RenderConfig::default(), dims).unwrap();
        controller.write("frame.png").unwrap();

        assert_eq!(controller.buffer().map(PixelBuffer::dims), Some(dims));
        assert_eq!(
            *presenter.presented.borrow(),
            vec![(PathBuf::from("frame.png"), 8 * 6 * 4)]
        );
    }

    #[test]
    fn test_generate_rejects_invalid_config() {
        let presenter = RecordingPresenter::default();
        let mut controller = RenderController::new(&presenter);
        let config = RenderConfig {
            max_iterations: 0,
            ..RenderConfig::default()
        };

        let result = controller.generate(&config, CanvasDimensions::default());

        assert_eq!(result, Err(InvalidConfigError::ZeroMaxIterations));
        assert!(controller.buffer().is_none());
    }
}
