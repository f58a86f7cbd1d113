//! Scheduling of scan ticks and health reports.
//!
//! Every chain gets its own cron job, so a slow node never delays the others.
//! Health reports run as two more jobs on the same scheduler.

use log::{error, info};
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
	models::ScheduleConfig,
	services::{
		blockwatcher::{BlockWatcherError, ChainScanner, HealthReport},
		notification::NotificationRouter,
	},
};

/// Owns the job scheduler driving all scanners
pub struct BlockWatcherService<R: NotificationRouter + 'static> {
	scanners: Vec<Arc<dyn ChainScanner>>,
	router: Arc<R>,
	schedule: ScheduleConfig,
	scheduler: Option<JobScheduler>,
}

impl<R: NotificationRouter + 'static> BlockWatcherService<R> {
	pub fn new(
		scanners: Vec<Arc<dyn ChainScanner>>,
		router: Arc<R>,
		schedule: ScheduleConfig,
	) -> Self {
		Self {
			scanners,
			router,
			schedule,
			scheduler: None,
		}
	}

	pub fn scanners(&self) -> &[Arc<dyn ChainScanner>] {
		&self.scanners
	}

	/// Registers all jobs and starts the scheduler
	pub async fn start(&mut self) -> Result<(), BlockWatcherError> {
		let scheduler = JobScheduler::new().await.map_err(|e| {
			BlockWatcherError::scheduler_error(format!("Failed to create scheduler: {}", e))
		})?;

		for scanner in &self.scanners {
			self.schedule_scanner(&scheduler, scanner.clone()).await?;
		}

		self.schedule_report(&scheduler, HealthReport::Hourly, &self.schedule.hourly_report)
			.await?;
		self.schedule_report(&scheduler, HealthReport::Daily, &self.schedule.daily_report)
			.await?;

		scheduler.start().await.map_err(|e| {
			BlockWatcherError::scheduler_error(format!("Failed to start scheduler: {}", e))
		})?;

		info!("Block watcher started for {} chains", self.scanners.len());
		self.scheduler = Some(scheduler);
		Ok(())
	}

	/// Shuts the scheduler down; in-flight scans finish on their own
	pub async fn stop(&mut self) -> Result<(), BlockWatcherError> {
		if let Some(mut scheduler) = self.scheduler.take() {
			scheduler.shutdown().await.map_err(|e| {
				BlockWatcherError::scheduler_error(format!("Failed to stop scheduler: {}", e))
			})?;
			info!("Block watcher stopped");
		}
		Ok(())
	}

	async fn schedule_scanner(
		&self,
		scheduler: &JobScheduler,
		scanner: Arc<dyn ChainScanner>,
	) -> Result<(), BlockWatcherError> {
		let chain = scanner.chain_name().to_string();

		let job = Job::new_async(self.schedule.scan.as_str(), move |_uuid, _l| {
			let scanner = scanner.clone();

			Box::pin(async move {
				if let Err(e) = scanner.scan().await {
					error!("Scan failed for chain {}: {}", scanner.chain_name(), e);
				}
			})
		})
		.map_err(|e| {
			BlockWatcherError::scheduler_error(format!(
				"Failed to create scan job for {}: {}",
				chain, e
			))
		})?;

		scheduler.add(job).await.map_err(|e| {
			BlockWatcherError::scheduler_error(format!("Failed to add scan job for {}: {}", chain, e))
		})?;

		info!("Scheduled scans for chain {}", chain);
		Ok(())
	}

	async fn schedule_report(
		&self,
		scheduler: &JobScheduler,
		report: HealthReport,
		cron: &str,
	) -> Result<(), BlockWatcherError> {
		let scanners = self.scanners.clone();
		let router = self.router.clone();

		let job = Job::new_async(cron, move |_uuid, _l| {
			let scanners = scanners.clone();
			let router = router.clone();

			Box::pin(async move {
				if !report.send(&scanners, router.as_ref()).await {
					error!("Failed to deliver {}", report.header());
				}
			})
		})
		.map_err(|e| {
			BlockWatcherError::scheduler_error(format!(
				"Failed to create {} job: {}",
				report.header(),
				e
			))
		})?;

		scheduler.add(job).await.map_err(|e| {
			BlockWatcherError::scheduler_error(format!("Failed to add {} job: {}", report.header(), e))
		})?;
		Ok(())
	}
}
