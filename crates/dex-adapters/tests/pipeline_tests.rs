//! Escenarios completos `validate → normalize → fetch → render` contra el
//! catálogo en memoria.
use std::sync::Arc;

use dex_adapters::{build_controller, ItemError, ItemResult, OutputTarget, RequestContext};
use dex_core::{PipelineEventKind, StageStatus, TerminalState};
use dex_domain::{EffectSelection, Linked, Mode};
use dex_providers::FixtureFetcher;

const ROOT: &str = "https://pokeapi.test/api/v2";

async fn run(fixture: FixtureFetcher, mut ctx: RequestContext) -> (Arc<FixtureFetcher>, RequestContext, dex_core::PipelineRun) {
    let fixture = Arc::new(fixture);
    let mut controller = build_controller(fixture.clone(), ROOT, EffectSelection::default()).expect("pipeline builds");
    let run = controller.execute(&mut ctx).await;
    (fixture, ctx, run)
}

#[tokio::test]
async fn moves_with_one_unknown_identifier() {
    let ctx = RequestContext::new(Mode::Move).with_data("1 2 9999");
    let (fixture, ctx, run) = run(FixtureFetcher::sample_catalog(ROOT), ctx).await;

    assert_eq!(run.state, TerminalState::Completed);
    assert_eq!(ctx.items, vec!["1", "2", "9999"]);
    assert_eq!(ctx.results.len(), 3);
    assert_eq!(ctx.results[0].record().and_then(|r| r.as_move()).map(|m| m.name.as_str()), Some("pound"));
    assert_eq!(ctx.results[1].record().and_then(|r| r.as_move()).map(|m| m.name.as_str()), Some("karate-chop"));
    assert_eq!(ctx.results[2],
               ItemResult::Failed { identifier: "9999".into(),
                                    error: ItemError::NotFound });
    assert_eq!(fixture.call_count(), 3);

    let rendered = ctx.rendered.expect("render ran");
    assert!(rendered.starts_with("\nName: pound\n"));
    assert!(rendered.ends_with("9999: not found\n"));
}

#[tokio::test]
async fn expanded_creature_is_fully_resolved() {
    let ctx = RequestContext::new(Mode::Creature).with_data("25").expanded(true);
    let (_, ctx, run) = run(FixtureFetcher::sample_catalog(ROOT), ctx).await;

    assert!(run.is_completed());
    let creature = ctx.results[0].record().and_then(|r| r.as_creature()).expect("creature 25");
    assert!(creature.is_expanded());
    assert_eq!(creature.stats.len(), 6);
    assert_eq!(creature.abilities.len(), 2);
    assert_eq!(creature.moves.len(), 4);
    assert!(creature.stats.iter().all(|s| s.stat.is_record()));
    assert!(creature.abilities.iter().all(Linked::is_record));
    assert!(creature.moves.iter().all(Linked::is_record));
}

#[tokio::test]
async fn compact_creature_is_not_expanded() {
    let ctx = RequestContext::new(Mode::Creature).with_data("PIKACHU");
    let (fixture, ctx, run) = run(FixtureFetcher::sample_catalog(ROOT), ctx).await;

    assert!(run.is_completed());
    let creature = ctx.results[0].record().and_then(|r| r.as_creature()).unwrap();
    assert!(!creature.is_expanded());
    assert!(creature.moves.iter().all(Linked::is_reference));
    assert_eq!(fixture.call_count(), 1);
}

#[tokio::test]
async fn bad_input_extension_aborts_before_any_fetch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ids.csv");
    std::fs::write(&path, "1\n2\n").unwrap();

    let ctx = RequestContext::new(Mode::Move).with_file(&path);
    let (fixture, ctx, run) = run(FixtureFetcher::sample_catalog(ROOT), ctx).await;

    assert_eq!(run.state,
               TerminalState::Aborted { stage: "validate".into(),
                                        message: "Input file must be a text file".into() });
    assert_eq!(fixture.call_count(), 0);
    assert!(ctx.items.is_empty());
    assert!(ctx.rendered.is_none());
    assert_eq!(run.status_of("validate"), Some(StageStatus::Failed));
    assert_eq!(run.status_of("normalize"), Some(StageStatus::Pending));
    assert_eq!(run.status_of("render"), Some(StageStatus::Pending));
}

#[tokio::test]
async fn bad_output_extension_aborts() {
    let ctx = RequestContext::new(Mode::Move).with_data("1").with_output(OutputTarget::parse("out.json"));
    let (fixture, _, run) = run(FixtureFetcher::sample_catalog(ROOT), ctx).await;

    assert_eq!(run.abort_message(), Some("Output file must be a text file"));
    assert_eq!(fixture.call_count(), 0);
}

#[tokio::test]
async fn broken_move_reference_still_reaches_render() {
    let fixture = FixtureFetcher::sample_catalog(ROOT).transport_error(format!("{ROOT}/move/7/"), "connection reset");
    let ctx = RequestContext::new(Mode::Creature).with_data("25").expanded(true);
    let (_, ctx, run) = run(fixture, ctx).await;

    assert!(run.is_completed());
    assert_eq!(run.status_of("render"), Some(StageStatus::FinishedOk));
    let creature = ctx.results[0].record().and_then(|r| r.as_creature()).unwrap();
    assert_eq!(creature.moves.iter().filter(|m| m.is_record()).count(), 3);
    assert!(creature.moves[2].is_unavailable());
    assert!(ctx.rendered.unwrap().contains("thunder-punch: unavailable (transport error: connection reset)"));
}

#[tokio::test]
async fn unreachable_catalog_aborts_at_fetch() {
    let ctx = RequestContext::new(Mode::Move).with_data("1 2");
    let (_, ctx, run) = run(FixtureFetcher::new().unreachable(), ctx).await;

    match &run.state {
        TerminalState::Aborted { stage, message } => {
            assert_eq!(stage, "fetch");
            assert!(message.contains("unreachable"), "{message}");
        }
        other => panic!("expected abort, got {other:?}"),
    }
    assert!(ctx.results.is_empty());
}

#[tokio::test]
async fn file_input_and_file_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ids.txt");
    let output = dir.path().join("out.txt");
    std::fs::write(&input, "static\n\n  9  \n").unwrap();

    let ctx = RequestContext::new(Mode::Ability).with_file(&input).with_output(OutputTarget::File(output.clone()));
    let fixture = FixtureFetcher::sample_catalog(ROOT).found(format!("{ROOT}/ability/static"),
                                                             dex_providers::fixture::ability_payload(9, "static", ROOT));
    let (_, ctx, run) = run(fixture, ctx).await;

    assert!(run.is_completed());
    assert_eq!(ctx.items, vec!["static", "9"]);
    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(Some(written.as_str()), ctx.rendered.as_deref());
    assert_eq!(written.matches("Name: static").count(), 2);
    assert!(written.contains("Has a 30% chance of paralyzing"));
}

#[tokio::test]
async fn trace_records_every_stage_in_order() {
    let fixture = Arc::new(FixtureFetcher::sample_catalog(ROOT));
    let mut controller = build_controller(fixture, ROOT, EffectSelection::default()).unwrap();
    assert_eq!(controller.stage_ids(), vec!["validate", "normalize", "fetch", "render"]);

    let mut ctx = RequestContext::new(Mode::Move).with_data("1");
    let run = controller.execute(&mut ctx).await;
    let events = controller.events_for(run.run_id);

    assert_eq!(events.len(), 9);
    assert!(matches!(&events[0].kind, PipelineEventKind::StageStarted { stage_id, .. } if stage_id == "validate"));
    assert!(matches!(events[8].kind, PipelineEventKind::PipelineCompleted { stage_count: 4 }));
    assert!(events.windows(2).all(|w| w[0].seq < w[1].seq));
}
