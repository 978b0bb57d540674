//! The timer loop.

use tokio::sync::broadcast;
use tokio::time::{sleep, Instant};

use crate::blockchain::{ChainRpc, SendOutcome, TransactionSender};
use crate::config::ScheduleConfig;
use crate::faucet::{FaucetApi, FaucetOutcome};
use crate::scheduler::timer::TimerState;

/// Outcomes of the actions that fired during one iteration.
#[derive(Debug, Default)]
pub struct TickReport {
    pub send: Option<SendOutcome>,
    pub faucet: Option<FaucetOutcome>,
}

/// Owns the timers and both actions; drives them from a single loop.
pub struct AutoSender<C, F> {
    sender: TransactionSender<C>,
    faucet: F,
    schedule: ScheduleConfig,
    timers: TimerState,
}

impl<C: ChainRpc, F: FaucetApi> AutoSender<C, F> {
    /// Timers start now.
    pub fn new(sender: TransactionSender<C>, faucet: F, schedule: ScheduleConfig) -> Self {
        let timers = TimerState::new(Instant::now(), &schedule);
        Self {
            sender,
            faucet,
            schedule,
            timers,
        }
    }

    pub fn timers(&self) -> &TimerState {
        &self.timers
    }

    /// Run whatever is due at `now` and reset the timers of what ran.
    pub async fn tick(&mut self, now: Instant) -> TickReport {
        let due = self.timers.due(now);
        let mut report = TickReport::default();

        if due.send {
            report.send = Some(self.sender.send().await);
            self.timers.mark_sent(now);
        }

        if due.faucet {
            report.faucet = Some(self.faucet.request_funds(self.sender.sender()).await);
            self.timers.mark_faucet(now);
        }

        report
    }

    /// Loop until `shutdown` fires. No action outcome ends the loop.
    pub async fn run(&mut self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            send_interval_secs = self.schedule.send_interval_secs,
            faucet_interval_secs = self.schedule.faucet_interval_secs,
            "Auto-send loop starting"
        );

        loop {
            let report = self.tick(Instant::now()).await;
            log_report(&report);

            tokio::select! {
                _ = sleep(self.schedule.poll_interval()) => {}
                _ = shutdown.recv() => {
                    tracing::info!("Auto-send loop received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }
}

fn log_report(report: &TickReport) {
    match &report.send {
        Some(SendOutcome::Sent { tx_hash }) => {
            tracing::info!(tx_hash = %tx_hash, "Transaction sent")
        }
        Some(outcome @ SendOutcome::InsufficientFunds { .. }) => tracing::warn!("{}", outcome),
        Some(outcome @ SendOutcome::Failed(_)) => tracing::error!("{}", outcome),
        None => {}
    }

    match &report.faucet {
        Some(FaucetOutcome::Credited) => tracing::info!("Faucet successfully retrieved"),
        Some(FaucetOutcome::Rejected { status, body }) => tracing::warn!(
            status = status.as_u16(),
            body = %body,
            "Error retrieving faucet"
        ),
        Some(FaucetOutcome::Failed(e)) => tracing::error!(error = %e, "Error retrieving faucet"),
        None => {}
    }
}
