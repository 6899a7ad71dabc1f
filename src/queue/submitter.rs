use crate::{queue::Feedback, traits::StatusSink, Status};
use tracing::instrument;

/// Submits pending feedback for the game being left.
///
/// An unset cell produces no outbound call. Otherwise exactly one status
/// update is issued and awaited. The call is never retried; the caller owns
/// the decision of what a failure means for navigation.
#[instrument(level = "trace", skip(sink))]
pub async fn submit<S>(
    sink: &S,
    feedback: Feedback,
    appid: &str,
    steam_id: &str,
) -> Result<(), Status>
where
    S: StatusSink + ?Sized,
{
    match feedback.current() {
        Some(status) => sink.update_status(appid, status, steam_id).await,
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::GameStatus;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        calls: Mutex<Vec<(String, GameStatus, String)>>,
        fail: bool,
    }

    #[async_trait]
    impl StatusSink for RecordingSink {
        async fn update_status(
            &self,
            appid: &str,
            status: GameStatus,
            steam_id: &str,
        ) -> Result<(), Status> {
            self.calls
                .lock()
                .unwrap()
                .push((appid.to_owned(), status, steam_id.to_owned()));
            match self.fail {
                true => Err(Status::internal("recommender unavailable")),
                false => Ok(()),
            }
        }
    }

    #[tokio::test]
    async fn unset_feedback_makes_no_call() {
        let sink = RecordingSink::default();

        let result = submit(&sink, Feedback::new(), "100", "steamid1").await;

        assert!(result.is_ok());
        assert!(sink.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn liked_feedback_makes_exactly_one_call() {
        let sink = RecordingSink::default();
        let mut feedback = Feedback::new();
        feedback.like();

        let result = submit(&sink, feedback, "100", "steamid1").await;

        assert!(result.is_ok());
        let calls = sink.calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![("100".to_owned(), GameStatus::Liked, "steamid1".to_owned())]
        );
    }

    #[tokio::test]
    async fn disliked_feedback_carries_disliked_status() {
        let sink = RecordingSink::default();
        let mut feedback = Feedback::new();
        feedback.dislike();

        submit(&sink, feedback, "730", "steamid2").await.unwrap();

        let calls = sink.calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![("730".to_owned(), GameStatus::Disliked, "steamid2".to_owned())]
        );
    }

    #[tokio::test]
    async fn sink_failure_is_reported_not_retried() {
        let sink = RecordingSink {
            fail: true,
            ..Default::default()
        };
        let mut feedback = Feedback::new();
        feedback.like();

        let result = submit(&sink, feedback, "100", "steamid1").await;

        assert!(result.is_err());
        assert_eq!(sink.calls.lock().unwrap().len(), 1);
    }
}
