use riverkit::quiz::{host::Host, Session, View, PERFECT_SUMMARY_DELAY};
use riverkit::Catalog;
use tokio::time::Instant;

fn init() -> Session {
    let _ = env_logger::builder().is_test(true).try_init();
    Session::new(Catalog::built_in().question_set().unwrap())
}

#[tokio::test(start_paused = true)]
async fn a_perfect_run_through_the_shipped_questions() {
    let session = init();
    let correct: Vec<usize> = Catalog::built_in().questions.iter().map(|q| usize::from(q.answer)).collect();
    let total = correct.len();

    let host = Host::spawn(session);
    let mut views = host.views();
    for (i, &option) in correct.iter().enumerate() {
        host.select(option);
        if i + 1 < total {
            host.advance();
        }
    }

    let start = Instant::now();
    loop {
        views.changed().await.unwrap();
        if let View::Summary { score, total: n, message } = &*views.borrow() {
            assert_eq!((*score, *n), (total, total));
            assert_eq!(*message, "Perfect! You're a River Guardian!");
            break;
        }
    }
    assert!(start.elapsed() <= PERFECT_SUMMARY_DELAY, "commands were queued up front; only the finale remains");
}

#[tokio::test(start_paused = true)]
async fn retake_after_the_summary_starts_clean() {
    let session = init();
    let host = Host::spawn(session);
    let mut views = host.views();

    for i in 0..6 {
        host.select(0);
        if i < 5 {
            host.advance();
        }
    }
    loop {
        views.changed().await.unwrap();
        if matches!(&*views.borrow(), View::Summary { .. }) {
            break;
        }
    }

    host.restart();
    loop {
        views.changed().await.unwrap();
        if let View::Question { index, score, selection, .. } = &*views.borrow() {
            assert_eq!(*index, 0);
            assert_eq!(*score, 0);
            assert_eq!(*selection, None);
            break;
        }
    }
}
