use crate::client::{GameRenderState, GameUpdateState};
use crate::shared::GridConfig;
use crate::time::{self, timestamp_as_usecs};
use crate::window::{EventLoop, Window};
use anyhow::Result;
use std::path::Path;

// 60 simulation frames per second.
const FRAMETIME: u64 = 16_666;

pub struct Client<'a> {
    // Update.
    update_ts: u64,
    update_state: GameUpdateState,

    // Render.
    render_state: GameRenderState<'a>,

    // Diagnostic.
    acc_n: u64,
    prestep_acc: u64,
    step_acc: u64,
    poststep_acc: u64,
    render_acc: u64,
}

impl<'a> Client<'a> {
    pub fn new(root: &'static Path, window: &'a Window, config: GridConfig) -> Result<Self> {
        let update_state = GameUpdateState::new(root, config)?;
        let render_state = GameRenderState::new(window, config, update_state.sprites())?;

        Ok(Self {
            update_ts: timestamp_as_usecs(),
            update_state,

            render_state,

            acc_n: 0,
            prestep_acc: 0,
            step_acc: 0,
            poststep_acc: 0,
            render_acc: 0,
        })
    }

    pub fn update_once(&mut self, event_loop: &mut EventLoop) -> bool {
        // Wait out the remainder of the frame.
        let next_timestamp = time::wait(self.update_ts + FRAMETIME, 1_000);

        // Get inputs.
        let input_events = event_loop.poll();

        // Prestep.
        let ts = timestamp_as_usecs();
        {
            let end = self.update_state.prestep(self.update_ts, input_events.iter());
            if end {
                return true;
            }
            self.render_state.handle_events(input_events.iter());
        }
        self.prestep_acc += timestamp_as_usecs() - ts;

        // Step.
        let ts = timestamp_as_usecs();
        while self.update_ts + FRAMETIME <= next_timestamp {
            self.update_state.step(self.update_ts, FRAMETIME);
            self.update_ts += FRAMETIME;
        }
        self.step_acc += timestamp_as_usecs() - ts;

        // Poststep.
        let ts = timestamp_as_usecs();
        let game_frame = self.update_state.poststep(self.update_ts);
        self.poststep_acc += timestamp_as_usecs() - ts;

        // Render.
        let ts = timestamp_as_usecs();
        self.render_state.render(game_frame);
        self.render_acc += timestamp_as_usecs() - ts;

        self.acc_n += 1;
        if self.acc_n > 60 * 5 {
            log::debug!(
                "frame: {:.2}ms (prestep: {:.2}ms, step: {:.2}ms, poststep: {:.2}ms, render: {:.2}ms)",
                ((self.prestep_acc + self.step_acc + self.poststep_acc + self.render_acc)
                    / self.acc_n) as f32
                    * 0.001,
                (self.prestep_acc / self.acc_n) as f32 * 0.001,
                (self.step_acc / self.acc_n) as f32 * 0.001,
                (self.poststep_acc / self.acc_n) as f32 * 0.001,
                (self.render_acc / self.acc_n) as f32 * 0.001
            );
            self.prestep_acc = 0;
            self.step_acc = 0;
            self.poststep_acc = 0;
            self.render_acc = 0;
            self.acc_n = 0;
        }

        false
    }
}
