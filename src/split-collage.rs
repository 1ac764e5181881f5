use collage_tools::{run_jobs, Job};
use structopt::StructOpt;

#[derive(StructOpt)]
pub struct Opts {
    /// Directory holding the collages. Quadrants are written next to them.
    #[structopt(default_value = ".")]
    base_dir: std::path::PathBuf,
    /// `<source>:<prefix>`, may be repeated. Defaults to the tech and web collages.
    #[structopt(long = "job")]
    jobs: Vec<Job>,
}

impl Opts {
    fn jobs(&self) -> Vec<Job> {
        if self.jobs.is_empty() {
            Job::defaults()
        } else {
            self.jobs.clone()
        }
    }
}

fn main() {
    let opts = Opts::from_args();

    run_jobs(&opts.jobs(), &opts.base_dir);
}
