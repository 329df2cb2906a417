use tokio::sync::{mpsc, oneshot};
use tracing::{debug, trace};

use crate::{error::Error, gpa::Gpa, grade::GradeRecord};

pub type Message = Result<GradeRecord, Error>;

#[derive(Debug, Default, PartialEq)]
pub struct Totals {
    pub quality_points: f64,
    pub credits: u64,
}

impl Totals {
    pub fn add(&mut self, record: &GradeRecord) -> Result<(), Error> {
        let points = record.quality_points()?;
        trace!(grade = %record.grade, credits = record.credits, points, "adding");
        self.quality_points += points;
        self.credits += u64::from(record.credits);
        Ok(())
    }

    pub fn gpa(&self) -> Result<Gpa, Error> {
        if self.credits == 0 {
            return Err(Error::NoCredits);
        }
        Ok(Gpa(self.quality_points / self.credits as f64))
    }
}

async fn drain(rx_msg: &mut mpsc::Receiver<Message>) -> Result<Gpa, Error> {
    let mut totals = Totals::default();
    while let Some(msg) = rx_msg.recv().await {
        totals.add(&msg?)?;
    }
    debug!(
        quality_points = totals.quality_points,
        credits = totals.credits,
        "grades exhausted"
    );
    totals.gpa()
}

/// Spawns the aggregator. It runs until `rx_msg` is closed or the first error arrives, then
/// answers on the returned channel.
pub async fn run(mut rx_msg: mpsc::Receiver<Message>) -> oneshot::Receiver<Result<Gpa, Error>> {
    let (tx_gpa, rx_gpa) = oneshot::channel();

    tokio::spawn(async move {
        let res = drain(&mut rx_msg).await;
        // hang up before answering so a blocked reader stops
        drop(rx_msg);
        if tx_gpa.send(res).is_err() {
            debug!("gpa receiver dropped");
        }
    });

    rx_gpa
}
