use std::future::Future;
use std::pin::Pin;

use log::error;
use tokio::sync::mpsc;

pub type PinFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

/// Runs every future on its own task and collects the outputs in
/// completion order. Panicked tasks are logged and skipped.
pub async fn await_all<T: Send + 'static>(futures: Vec<PinFuture<T>>) -> Vec<T> {
    let (tx, mut rx) = mpsc::channel::<T>(futures.len().max(1));

    let mut tasks: Vec<tokio::task::JoinHandle<()>> = vec![];

    for future in futures {
        let tx = tx.clone();
        let task = tokio::spawn(async move {
            let awaited = future.await;

            if tx.send(awaited).await.is_err() {
                error!("await_all receiver dropped");
            }
        });

        tasks.push(task);
    }

    drop(tx);

    let mut r: Vec<T> = vec![];

    while let Some(awaited) = rx.recv().await {
        r.push(awaited);
    }

    for task in tasks {
        if let Err(err) = task.await {
            error!("{}", err);
        }
    }

    r
}
