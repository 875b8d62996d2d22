use async_trait::async_trait;
use dex_core::{EventStore, PipelineController, PipelineEvent, PipelineEventKind, StageDefinition, StageKind,
               StageRunResult, TerminalState};
use uuid::Uuid;

// Store que sólo conserva los kinds, para verificar que el controlador acepta
// cualquier implementación de EventStore.
#[derive(Default)]
struct KindsOnly {
    kinds: Vec<PipelineEventKind>,
}

impl EventStore for KindsOnly {
    fn append_kind(&mut self, run_id: Uuid, kind: PipelineEventKind) -> PipelineEvent {
        self.kinds.push(kind.clone());
        PipelineEvent { seq: self.kinds.len() as u64 - 1,
                        run_id,
                        kind,
                        ts: chrono::Utc::now() }
    }
    fn list(&self, _run_id: Uuid) -> Vec<PipelineEvent> { Vec::new() }
}

struct Count;

#[async_trait]
impl StageDefinition<u32> for Count {
    fn id(&self) -> &str { "count" }
    fn kind(&self) -> StageKind { StageKind::Transform }
    async fn run(&self, ctx: &mut u32) -> StageRunResult {
        *ctx += 1;
        StageRunResult::Success
    }
}

#[tokio::test]
async fn controller_writes_to_injected_store() {
    let mut controller = PipelineController::<u32>::builder().with_event_store(KindsOnly::default())
                                                             .add_stage(Count)
                                                             .build()
                                                             .expect("build");
    let mut ctx = 0u32;
    let run = controller.execute(&mut ctx).await;

    assert_eq!(run.state, TerminalState::Completed);
    assert_eq!(ctx, 1);
    assert_eq!(controller.event_store().kinds.len(), 3);
    assert_eq!(StageRunResult::failure("x").into_pair(), ("x".to_string(), false));
}
