//! Engine module: `PipelineController`, su builder y el resultado de una
//! ejecución (`PipelineRun`).

pub mod builder;
pub mod core;
pub mod run;

pub use builder::PipelineBuilder;
pub use core::PipelineController;
pub use run::{PipelineRun, TerminalState};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::PipelineEventKind;
    use crate::stage::{StageDefinition, StageKind, StageRunResult, StageStatus};
    use async_trait::async_trait;

    // Contexto mínimo: cada etapa deja su huella en `trail`.
    #[derive(Debug, Default)]
    struct TrailCtx {
        trail: Vec<String>,
        fail_at: Option<&'static str>,
    }

    struct Mark(&'static str, StageKind);

    #[async_trait]
    impl StageDefinition<TrailCtx> for Mark {
        fn id(&self) -> &str { self.0 }
        fn kind(&self) -> StageKind { self.1 }
        async fn run(&self, ctx: &mut TrailCtx) -> StageRunResult {
            if ctx.fail_at == Some(self.0) {
                return StageRunResult::failure(format!("{} refused", self.0));
            }
            ctx.trail.push(self.0.to_string());
            StageRunResult::Success
        }
    }

    fn four_stage_pipeline() -> PipelineController<TrailCtx> {
        PipelineController::builder()
            .add_stage(Mark("validate", StageKind::Check))
            .add_stage(Mark("normalize", StageKind::Transform))
            .add_stage(Mark("fetch", StageKind::Fetch))
            .add_stage(Mark("render", StageKind::Sink))
            .build()
            .expect("pipeline should build")
    }

    #[tokio::test]
    async fn runs_every_stage_in_order() {
        let mut controller = four_stage_pipeline();
        let mut ctx = TrailCtx::default();

        let run = controller.execute(&mut ctx).await;

        assert_eq!(run.state, TerminalState::Completed);
        assert_eq!(ctx.trail, vec!["validate", "normalize", "fetch", "render"]);
        assert!(run.statuses.iter().all(|(_, s)| *s == StageStatus::FinishedOk));

        let events = controller.events_for(run.run_id);
        assert_eq!(events.len(), 9); // 4 started + 4 finished + completed
        assert!(matches!(events.last().map(|e| &e.kind), Some(PipelineEventKind::PipelineCompleted { stage_count: 4 })));
    }

    #[tokio::test]
    async fn failure_short_circuits_the_chain() {
        let mut controller = four_stage_pipeline();
        let mut ctx = TrailCtx { fail_at: Some("normalize"), ..Default::default() };

        let run = controller.execute(&mut ctx).await;

        assert_eq!(run.state,
                   TerminalState::Aborted { stage: "normalize".into(),
                                            message: "normalize refused".into() });
        // Sólo la primera etapa alcanzó a mutar el contexto.
        assert_eq!(ctx.trail, vec!["validate"]);
        assert_eq!(run.status_of("normalize"), Some(StageStatus::Failed));
        assert_eq!(run.status_of("fetch"), Some(StageStatus::Pending));
        assert_eq!(run.status_of("render"), Some(StageStatus::Pending));

        let events = controller.events_for(run.run_id);
        assert!(!events.iter().any(|e| matches!(&e.kind, PipelineEventKind::StageStarted { stage_id, .. } if stage_id == "fetch")));
        assert!(matches!(events.last().map(|e| &e.kind), Some(PipelineEventKind::PipelineAborted { .. })));
    }

    #[tokio::test]
    async fn stage_can_be_run_in_isolation() {
        let controller = four_stage_pipeline();
        let mut ctx = TrailCtx::default();

        let res = controller.run_stage("fetch", &mut ctx).await.expect("known stage");
        assert!(res.is_success());
        assert_eq!(ctx.trail, vec!["fetch"]);

        assert!(controller.run_stage("missing", &mut ctx).await.is_err());
    }

    #[test]
    fn builder_rejects_empty_and_duplicate_pipelines() {
        let empty = PipelineController::<TrailCtx>::builder().build();
        assert_eq!(empty.err(), Some(crate::CoreEngineError::EmptyPipeline));

        let dup = PipelineController::<TrailCtx>::builder().add_stage(Mark("a", StageKind::Check))
                                                            .add_stage(Mark("a", StageKind::Sink))
                                                            .build();
        assert_eq!(dup.err(), Some(crate::CoreEngineError::DuplicateStage("a".into())));
    }

    #[test]
    fn stage_ids_are_inspectable() {
        let controller = four_stage_pipeline();
        assert_eq!(controller.stage_ids(), vec!["validate", "normalize", "fetch", "render"]);
        assert_eq!(controller.len(), 4);
    }
}
