use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::render_controller::RenderController;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::input::cli::args::CliArgs;
use crate::input::cli::job_file::RenderJob;
use crate::presenters::file::png::PngFilePresenter;
use crate::presenters::file::ppm::PpmFilePresenter;

/// Renders the frame described by the command line and writes it to disk.
pub struct RunCliCommand {
    args: CliArgs,
}

impl RunCliCommand {
    pub fn new(args: CliArgs) -> Self {
        Self { args }
    }

    /// Returns the path the frame was written to.
    pub fn execute(&self) -> Result<PathBuf, Box<dyn Error>> {
        let job = match &self.args.job {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading job file");
                RenderJob::load(path)?
            }
            None => self.args.to_job()?,
        };

        let output = self
            .args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(job.config.variant));

        if is_ppm(&output) {
            render_to(PpmFilePresenter::new(), &job, &output)?;
        } else {
            render_to(PngFilePresenter::new(), &job, &output)?;
        }

        Ok(output)
    }
}

fn render_to<P: FilePresenterPort>(
    presenter: P,
    job: &RenderJob,
    output: &Path,
) -> Result<(), Box<dyn Error>> {
    let mut controller = RenderController::new(presenter);
    controller.generate(&job.config, job.dimensions)?;
    controller.write(output)?;

    Ok(())
}

fn is_ppm(path: &Path) -> bool {
    path.extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("ppm"))
}

/// `fractal-<variant>-<unix millis>.png` in the working directory.
fn default_output_path(variant: FractalKinds) -> PathBuf {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();

    PathBuf::from(format!("fractal-{}-{}.png", variant.id(), millis))
}
