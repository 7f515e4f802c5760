//! Progress reporting for council execution

use colored::Colorize;
use council_application::ports::progress::CouncilProgress;
use council_domain::{Model, Stage};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports progress with one bar per stage
pub struct ProgressReporter {
    multi: MultiProgress,
    stage_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            stage_bar: Mutex::new(None),
        }
    }

    fn stage_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }

    fn short_name(stage: &Stage) -> &'static str {
        match stage {
            Stage::Collect => "Stage 1",
            Stage::Rank => "Stage 2",
            Stage::Synthesize => "Stage 3",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl CouncilProgress for ProgressReporter {
    fn on_stage_start(&self, stage: &Stage, total: usize) {
        let pb = self.multi.add(ProgressBar::new(total as u64));
        pb.set_style(Self::stage_style());
        pb.set_prefix(stage.display_name().to_string());
        pb.set_message("Starting...");

        *self.stage_bar.lock().unwrap() = Some(pb);
    }

    fn on_model_complete(&self, _stage: &Stage, model: &Model, success: bool) {
        if let Some(pb) = self.stage_bar.lock().unwrap().as_ref() {
            let status = if success {
                format!("{} {}", "v".green(), model.short_name())
            } else {
                format!("{} {}", "x".red(), model.short_name())
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_stage_complete(&self, stage: &Stage) {
        if let Some(pb) = self.stage_bar.lock().unwrap().take() {
            pb.finish_with_message(format!("{} complete", Self::short_name(stage).green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl CouncilProgress for SimpleProgress {
    fn on_stage_start(&self, stage: &Stage, total: usize) {
        println!("{} {} ({} calls)", "->".cyan(), stage.display_name().bold(), total);
    }

    fn on_model_complete(&self, _stage: &Stage, model: &Model, success: bool) {
        if success {
            println!("  {} {}", "v".green(), model);
        } else {
            println!("  {} {} (failed)", "x".red(), model);
        }
    }

    fn on_stage_complete(&self, _stage: &Stage) {
        println!();
    }
}
