use std::{sync::Arc, time::Duration};

use chrono::Utc;
use ranking::insights::Snapshot;
use tokio::{
    sync::mpsc::{self, Receiver, Sender},
    task::JoinHandle,
    time::sleep,
};
use tracing::error;

use crate::State;

enum Message {
    Refresh { snapshot: Snapshot },
}

pub fn spawn_service_to_refresh_snapshot(
    state: Arc<State>,
) -> Vec<JoinHandle<anyhow::Result<()>>> {
    let (tx, rx) = mpsc::channel(100);

    let sender_handler = sender(state.clone(), tx);
    let receiver_handler = receiver(state.clone(), rx);

    vec![sender_handler, receiver_handler]
}

fn sender(state: Arc<State>, tx: Sender<Message>) -> JoinHandle<anyhow::Result<()>> {
    tokio::spawn(async move {
        loop {
            sleep(Duration::from_secs(state.config.pause_secs)).await;

            let blogs = state.repository.blog.find_all().await;
            let Ok(blogs) = blogs else {
                error!(
                    task = "find all blogs",
                    error = blogs.unwrap_err().to_string(),
                );
                continue;
            };

            let saves = state.repository.wishlist.count_by_blog().await;
            let Ok(saves) = saves else {
                error!(
                    task = "count saves by blog",
                    error = saves.unwrap_err().to_string(),
                );
                continue;
            };

            let users = state.repository.user.count().await;
            let Ok(users) = users else {
                error!(
                    task = "count users",
                    error = users.unwrap_err().to_string(),
                );
                continue;
            };

            let subscribers = state.repository.subscriber.count().await;
            let Ok(subscribers) = subscribers else {
                error!(
                    task = "count subscribers",
                    error = subscribers.unwrap_err().to_string(),
                );
                continue;
            };

            let snapshot =
                ranking::insights::snapshot(&blogs, &saves, users, subscribers, Utc::now());

            let result = tx.send(Message::Refresh { snapshot }).await;
            if let Err(e) = result {
                error!(task = "send refresh", error = e.to_string());
            }
        }
    })
}

fn receiver(state: Arc<State>, mut rx: Receiver<Message>) -> JoinHandle<anyhow::Result<()>> {
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Some(Message::Refresh { snapshot }) => {
                    let json = serde_json::to_string(&snapshot);
                    let Ok(json) = json else {
                        error!(
                            task = "serialize snapshot",
                            error = json.unwrap_err().to_string(),
                        );
                        continue;
                    };

                    let result = state
                        .repository
                        .insight
                        .set(&json, state.config.snapshot_ttl_secs);
                    if let Err(e) = result {
                        error!(task = "store snapshot", error = e.to_string());
                    }
                }
                _ => {}
            }
        }
    })
}
