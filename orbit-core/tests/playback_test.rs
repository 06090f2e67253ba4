use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use orbit_core::{
    Catalog, HandoffEvent, OrbitError, PlaybackController, PlaybackDriver, PlaybackEngine,
    PlaybackEventKind, PlaybackPhase, TickOutcome,
};

fn engine() -> PlaybackEngine {
    PlaybackEngine::new(Arc::new(Catalog::builtin().unwrap()))
}

mod engine_tests {
    use super::*;

    #[test]
    fn test_travel_site_plays_all_six_in_order() {
        let mut engine = engine();
        engine.select_scenario("travel-site").unwrap();
        engine.run();

        for _ in 0..6 {
            engine.tick();
        }

        assert_eq!(engine.cursor(), 6);
        assert!(!engine.is_running());

        let log = engine.visible_log();
        assert_eq!(log.len(), 6);
        assert_eq!(
            log[0].event,
            HandoffEvent::new("orchestrator", "frontend", "Design hero + search UI")
        );
        assert_eq!(
            log[5].event,
            HandoffEvent::new("testing", "orchestrator", "Report & auto-fix")
        );
        let steps: Vec<usize> = log.iter().map(|e| e.step).collect();
        assert_eq!(steps, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_research_report_prefix_after_three_ticks() {
        let mut engine = engine();
        engine.select_scenario("research-report").unwrap();
        engine.run();
        for _ in 0..3 {
            engine.tick();
        }

        assert_eq!(engine.cursor(), 3);
        let visible: Vec<HandoffEvent> = engine.visible_log().into_iter().map(|e| e.event).collect();
        assert_eq!(
            visible,
            vec![
                HandoffEvent::new("orchestrator", "research", "Gather credible sources"),
                HandoffEvent::new("orchestrator", "writer", "Draft narrative"),
                HandoffEvent::new("research", "writer", "Hand off citations"),
            ]
        );
    }

    #[test]
    fn test_cursor_never_moves_backward_while_ticking() {
        let mut engine = engine();
        engine.select_scenario("food-delivery").unwrap();
        engine.run();

        let mut last = engine.cursor();
        for _ in 0..20 {
            let outcome = engine.tick();
            let cursor = engine.cursor();
            assert!(cursor >= last);
            assert!(cursor - last <= 1);
            if outcome == TickOutcome::Ignored {
                assert_eq!(cursor, last);
            }
            last = cursor;
        }
        assert_eq!(last, 5);
        assert!(!engine.is_running());
    }

    #[test]
    fn test_reset_always_idle() {
        let mut engine = engine();
        for ticks in 0..8 {
            engine.run();
            for _ in 0..ticks {
                engine.tick();
            }
            engine.reset();
            assert_eq!(engine.cursor(), 0);
            assert!(!engine.is_running());
            assert_eq!(engine.phase(), PlaybackPhase::Idle);
        }
    }

    #[test]
    fn test_select_valid_and_invalid() {
        let mut engine = engine();
        engine.run();
        engine.tick();

        engine.select_scenario("food-delivery").unwrap();
        assert_eq!(engine.state().scenario_id, "food-delivery");
        assert_eq!(engine.cursor(), 0);
        assert!(!engine.is_running());

        engine.run();
        engine.tick();
        let before = engine.state().clone();
        let err = engine.select_scenario("does-not-exist").unwrap_err();
        assert!(matches!(err, OrbitError::UnknownScenario(ref id) if id == "does-not-exist"));
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_run_at_end_restarts_from_zero() {
        let mut engine = engine();
        engine.select_scenario("research-report").unwrap();
        engine.run();
        while engine.tick() != TickOutcome::Finished {}
        assert_eq!(engine.cursor(), 5);

        let kinds = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&kinds);
        engine.subscribe(move |update| sink.lock().unwrap().push(update.kind.clone()));

        engine.run();
        assert_eq!(engine.cursor(), 0);
        assert!(engine.is_running());
        assert_eq!(
            kinds.lock().unwrap().as_slice(),
            &[PlaybackEventKind::Started { restarted: true }]
        );
    }

    #[test]
    fn test_pause_then_run_resumes() {
        let mut engine = engine();
        engine.run();
        engine.tick();
        engine.tick();
        engine.pause();
        engine.run();
        assert_eq!(engine.cursor(), 2);
        assert!(engine.is_running());
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut engine = engine();
        engine.run();
        engine.tick();

        let json = serde_json::to_value(engine.snapshot()).unwrap();
        assert_eq!(json["scenario_id"], "travel-site");
        assert_eq!(json["phase"], "running");
        assert_eq!(json["log"][0]["event"]["to"], "frontend");
    }
}

mod controller_tests {
    use super::*;

    #[test]
    fn test_controller_plays_research_report() {
        let period = Duration::from_millis(1100);
        let mut controller = PlaybackController::new(engine(), period);
        controller.select_scenario("research-report").unwrap();

        let start = Instant::now();
        controller.run(start);
        let mut now = start;
        while controller.engine().is_running() {
            now += period;
            controller.poll(now);
        }

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.cursor, 5);
        assert_eq!(snapshot.phase, PlaybackPhase::Completed);
        assert_eq!(now - start, period * 5);
    }
}

mod driver_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_driver_plays_travel_site_on_schedule() {
        let started = tokio::time::Instant::now();
        let mut driver = PlaybackDriver::new(engine(), Duration::from_millis(1100));

        driver.run().await;
        driver.finished().await;

        let snapshot = driver.snapshot().await;
        assert_eq!(snapshot.cursor, 6);
        assert!(!snapshot.running);
        assert_eq!(started.elapsed(), Duration::from_millis(6600));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_stops_driver() {
        let mut driver = PlaybackDriver::new(engine(), Duration::from_millis(1100));
        driver.run().await;
        tokio::time::sleep(Duration::from_millis(2500)).await;

        assert!(driver.reset().await);
        assert!(!driver.is_ticking());
        tokio::time::sleep(Duration::from_secs(10)).await;

        let snapshot = driver.snapshot().await;
        assert_eq!(snapshot.cursor, 0);
        assert_eq!(snapshot.phase, PlaybackPhase::Idle);
    }
}
