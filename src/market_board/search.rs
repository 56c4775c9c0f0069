use std::collections::HashSet;

use log::debug;
use tokio::sync::mpsc;
use tokio::time::{sleep, Duration};

/// Keep the candidates that are tradeable, in candidate order, without repeats
pub fn filter_tradeable(candidates: &[u32], tradeable: &HashSet<u32>) -> Vec<u32> {
    let mut seen = HashSet::with_capacity(candidates.len());
    candidates
        .iter()
        .copied()
        .filter(|id| tradeable.contains(id) && seen.insert(*id))
        .collect()
}

/// Trimmed query text, `None` when blank
pub fn normalize_query(raw: &str) -> Option<&str> {
    let query = raw.trim();
    (!query.is_empty()).then_some(query)
}

/// One line of an interactive session: free search text or a parsed command
#[derive(Debug, Clone, PartialEq)]
pub enum SessionInput<C> {
    Query(String),
    Command(C),
}

/// Debounce the query lines of a session while keeping input order.
///
/// A query is emitted once `delay` passes without a newer query arriving.
/// A command flushes the pending query before it is forwarded, so it always
/// acts on the view the user last typed. When the input closes, a pending
/// query is flushed and the output closes after everything sent before it.
pub fn debounce_queries<C: Send + 'static>(
    mut input: mpsc::Receiver<SessionInput<C>>,
    delay: Duration,
) -> mpsc::Receiver<SessionInput<C>> {
    let (tx, output) = mpsc::channel(16);

    tokio::spawn(async move {
        let mut pending: Option<String> = None;

        loop {
            let next = if pending.is_some() {
                tokio::select! {
                    next = input.recv() => next,
                    _ = sleep(delay) => {
                        if !flush(&tx, &mut pending).await {
                            debug!("Session output dropped, stopping");
                            return;
                        }
                        continue;
                    }
                }
            } else {
                input.recv().await
            };

            match next {
                Some(SessionInput::Query(text)) => pending = Some(text),
                Some(command) => {
                    if !flush(&tx, &mut pending).await || tx.send(command).await.is_err() {
                        debug!("Session output dropped, stopping");
                        return;
                    }
                }
                None => break,
            }
        }

        flush(&tx, &mut pending).await;
    });

    output
}

async fn flush<C>(tx: &mpsc::Sender<SessionInput<C>>, pending: &mut Option<String>) -> bool {
    match pending.take() {
        Some(text) => tx.send(SessionInput::Query(text)).await.is_ok(),
        None => true,
    }
}
