//! Bout orchestration.
//!
//! `BoutService` owns the injected store, the static content oracles, and
//! the per-player lock table, and drives one bout to completion:
//! matchmaking, combat resolution, team scoring, star player selection,
//! reward and level-up application, and the atomic per-player write-back.
//!
//! A bout holds every participant's lock from the first read to the last
//! write, so state mutation for one player is fully serialized while bouts
//! over disjoint players proceed in parallel. Only store calls suspend; the
//! resolution itself is CPU-only.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info};

use brawl_core::{
    BrawlerId, BrawlerOracle, Env, GameConfig, LevelUpEvent, MatchResult, Matchup, Outcome,
    PcgRng, PlayerProgression, RewardGrant, RngOracle, TablesOracle, compute_seed,
    grant_bout_reward, match_opponent, resolve_bout, rewards::DEFAULT_GAME_TYPE,
};
use brawl_content::ContentBundle;

use crate::error::{BoutError, Result};
use crate::locks::PlayerLocks;
use crate::report::{BoutReport, ParticipantReport};
use crate::store::{PlayerId, ProgressionStore};

/// Seed channels for the service's own rolls. Combat claims 0 and 1 for the
/// two sides, so service channels start above that.
const CHANNEL_MATCHMAKING: u32 = 2;
const CHANNEL_COMBAT: u32 = 3;
const CHANNEL_STAR_PLAYER: u32 = 4;
const CHANNEL_SEQUENCE: u32 = 5;

/// Most teammates a bout accepts next to the requesting player.
const MAX_TEAMMATES: usize = 2;

/// One participant's state while a bout is in flight.
struct PendingParticipant {
    player: PlayerId,
    progression: PlayerProgression,
    brawler: BrawlerId,
    opponent: Matchup,
    result: MatchResult,
}

/// Builder for [`BoutService`].
#[derive(Default)]
pub struct BoutServiceBuilder {
    store: Option<Arc<dyn ProgressionStore>>,
    brawlers: Option<Arc<dyn BrawlerOracle>>,
    tables: Option<Arc<dyn TablesOracle>>,
    config: Option<GameConfig>,
    seed: Option<u64>,
}

impl BoutServiceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject the progression store.
    pub fn store(mut self, store: impl ProgressionStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Take the catalog, tables, and config from a loaded content bundle.
    pub fn content(mut self, bundle: ContentBundle) -> Self {
        self.brawlers = Some(Arc::new(bundle.catalog));
        self.tables = Some(Arc::new(bundle.tables));
        self.config = Some(bundle.config);
        self
    }

    /// Inject a custom brawler oracle (overrides the bundle's).
    pub fn brawlers(mut self, brawlers: impl BrawlerOracle + 'static) -> Self {
        self.brawlers = Some(Arc::new(brawlers));
        self
    }

    /// Inject custom tables (overrides the bundle's).
    pub fn tables(mut self, tables: impl TablesOracle + 'static) -> Self {
        self.tables = Some(Arc::new(tables));
        self
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Pin the bout seed sequence, making every bout replayable. Without a
    /// seed each bout draws fresh entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// # Errors
    ///
    /// Returns [`BoutError::MissingComponents`] unless a store and content
    /// (or explicit oracles) were provided.
    pub fn build(self) -> Result<BoutService> {
        let (Some(store), Some(brawlers), Some(tables)) = (self.store, self.brawlers, self.tables)
        else {
            return Err(BoutError::MissingComponents);
        };
        Ok(BoutService {
            store,
            brawlers,
            tables,
            config: self.config.unwrap_or_default(),
            locks: PlayerLocks::new(),
            rng: PcgRng,
            seed_base: self.seed,
            bout_counter: AtomicU64::new(0),
        })
    }
}

/// The bout engine's invocation surface.
pub struct BoutService {
    store: Arc<dyn ProgressionStore>,
    brawlers: Arc<dyn BrawlerOracle>,
    tables: Arc<dyn TablesOracle>,
    config: GameConfig,
    locks: PlayerLocks,
    rng: PcgRng,
    seed_base: Option<u64>,
    bout_counter: AtomicU64,
}

impl std::fmt::Debug for BoutService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoutService")
            .field("config", &self.config)
            .field("seed_base", &self.seed_base)
            .field("bout_counter", &self.bout_counter)
            .finish_non_exhaustive()
    }
}

impl BoutService {
    pub fn builder() -> BoutServiceBuilder {
        BoutServiceBuilder::new()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    fn next_bout_seed(&self) -> u64 {
        let sequence = self.bout_counter.fetch_add(1, Ordering::Relaxed);
        match self.seed_base {
            Some(base) => compute_seed(base, sequence, CHANNEL_SEQUENCE, 0),
            None => rand::random(),
        }
    }

    /// Run one bout for the requesting player and up to two teammates.
    ///
    /// Every participant duels an independently matched opponent; the team
    /// outcome is the sign of wins minus losses, and rewards are paid per
    /// participant on that team outcome. All participants' records are
    /// locked for the duration and committed whole.
    ///
    /// # Errors
    ///
    /// Lineup problems, an unfinished tutorial for the requesting player,
    /// configuration mismatches, and store failures all abort the bout; no
    /// record is committed unless the whole bout computed cleanly.
    pub async fn start_bout(&self, player: PlayerId, teammates: &[PlayerId]) -> Result<BoutReport> {
        if teammates.len() > MAX_TEAMMATES {
            return Err(BoutError::TooManyTeammates {
                max: MAX_TEAMMATES,
                got: teammates.len(),
            });
        }

        let mut lineup = Vec::with_capacity(1 + teammates.len());
        lineup.push(player);
        lineup.extend_from_slice(teammates);

        let mut seen = HashSet::new();
        for id in &lineup {
            if !seen.insert(*id) {
                return Err(BoutError::DuplicatePlayer(*id));
            }
        }

        let _guards = self.locks.acquire_many(&lineup).await;

        let bout_seed = self.next_bout_seed();
        debug!(%player, teammates = teammates.len(), bout_seed, "starting bout");

        let brawlers: &dyn BrawlerOracle = self.brawlers.as_ref();
        let tables: &dyn TablesOracle = self.tables.as_ref();
        let rng: &dyn RngOracle = &self.rng;
        let env = Env::with_all(brawlers, tables, rng);

        // Resolve every participant's duel before touching any record.
        let mut pending = Vec::with_capacity(lineup.len());
        for (index, participant) in lineup.iter().enumerate() {
            let progression = self.store.load_or_create(participant, &self.config).await?;
            if index == 0 && !progression.tutorial_finished {
                return Err(BoutError::TutorialNotFinished(*participant));
            }

            let brawler = progression.selected_brawler_id().clone();
            let level = progression.selected_brawler()?.level;

            let opponent = match_opponent(
                &env,
                level,
                compute_seed(bout_seed, index as u64, CHANNEL_MATCHMAKING, 0),
            )?;
            let (result, _) = resolve_bout(
                &env,
                compute_seed(bout_seed, index as u64, CHANNEL_COMBAT, 0),
                (&brawler, level),
                (&opponent.brawler, opponent.level),
            )?;

            debug!(
                player = %participant,
                brawler = %brawler,
                opponent = %opponent.brawler,
                outcome = %result.outcome,
                margin = result.margin,
                "duel resolved"
            );

            pending.push(PendingParticipant {
                player: *participant,
                progression,
                brawler,
                opponent,
                result,
            });
        }

        let points: i32 = pending
            .iter()
            .map(|entry| match entry.result.outcome {
                Outcome::Win => 1,
                Outcome::Loss => -1,
                Outcome::Draw => 0,
            })
            .sum();
        let team_outcome = match points {
            p if p > 0 => Outcome::Win,
            p if p < 0 => Outcome::Loss,
            _ => Outcome::Draw,
        };

        let star_player = self.pick_star_player(&lineup, team_outcome, bout_seed);

        // Apply rewards and level-ups in memory, then commit whole records.
        let mut grants: Vec<(RewardGrant, Option<LevelUpEvent>)> =
            Vec::with_capacity(pending.len());
        for entry in &mut pending {
            let is_star = star_player == Some(entry.player);
            let grant = grant_bout_reward(
                &mut entry.progression,
                team_outcome,
                is_star,
                tables,
                DEFAULT_GAME_TYPE,
            )?;
            let level_up = entry.progression.apply_experience(tables)?;
            grants.push((grant, level_up));
        }

        for entry in &pending {
            self.store.save(&entry.player, &entry.progression).await?;
        }

        info!(
            %player,
            participants = lineup.len(),
            outcome = %team_outcome,
            star = ?star_player,
            "bout committed"
        );

        let participants = pending
            .into_iter()
            .zip(grants)
            .map(|(entry, (grant, level_up))| ParticipantReport {
                player: entry.player,
                brawler: entry.brawler,
                opponent: entry.opponent,
                result: entry.result,
                grant,
                level_up,
            })
            .collect();

        Ok(BoutReport {
            team_outcome,
            star_player,
            participants,
        })
    }

    /// A winning team always fields a star player; a drawn bout fields one
    /// on a coin flip; a losing team never does.
    fn pick_star_player(
        &self,
        lineup: &[PlayerId],
        team_outcome: Outcome,
        bout_seed: u64,
    ) -> Option<PlayerId> {
        let pick_seed = compute_seed(bout_seed, 0, CHANNEL_STAR_PLAYER, 0);
        let coin_seed = compute_seed(bout_seed, 0, CHANNEL_STAR_PLAYER, 1);

        match team_outcome {
            Outcome::Win => Some(lineup[self.rng.pick_index(pick_seed, lineup.len())]),
            Outcome::Draw => (self.rng.pick_index(coin_seed, 2) == 0)
                .then(|| lineup[self.rng.pick_index(pick_seed, lineup.len())]),
            Outcome::Loss => None,
        }
    }

    /// Mark the requesting player's tutorial as finished.
    pub async fn complete_tutorial(&self, player: &PlayerId) -> Result<()> {
        let _guard = self.locks.acquire(player).await;
        let mut progression = self.store.load_or_create(player, &self.config).await?;
        progression.tutorial_finished = true;
        self.store.save(player, &progression).await?;
        info!(%player, "tutorial finished");
        Ok(())
    }

    /// Snapshot of a player's progression record, materializing the
    /// new-player template on first contact.
    pub async fn progression(&self, player: &PlayerId) -> Result<PlayerProgression> {
        let _guard = self.locks.acquire(player).await;
        Ok(self.store.load_or_create(player, &self.config).await?)
    }

    /// Trophy total across the player's owned brawlers.
    pub async fn total_trophies(&self, player: &PlayerId) -> Result<u32> {
        Ok(self.progression(player).await?.total_trophies())
    }

    /// Personal-best total across the player's owned brawlers.
    pub async fn total_personal_best(&self, player: &PlayerId) -> Result<u32> {
        Ok(self.progression(player).await?.total_personal_best())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brawl_content::ContentFactory;

    use crate::store::MemoryStore;

    fn service_with_seed(seed: u64) -> BoutService {
        let bundle = ContentFactory::embedded().unwrap();
        BoutService::builder()
            .store(MemoryStore::new())
            .content(bundle)
            .seed(seed)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn build_requires_store_and_content() {
        let err = BoutService::builder().build().unwrap_err();
        assert!(matches!(err, BoutError::MissingComponents));
    }

    #[tokio::test]
    async fn tutorial_gates_the_requesting_player() {
        let service = service_with_seed(1);
        let player = PlayerId(1);

        let err = service.start_bout(player, &[]).await.unwrap_err();
        assert!(matches!(err, BoutError::TutorialNotFinished(p) if p == player));

        service.complete_tutorial(&player).await.unwrap();
        service.start_bout(player, &[]).await.unwrap();
    }

    #[tokio::test]
    async fn lineup_validation_rejects_bad_teams() {
        let service = service_with_seed(2);
        let player = PlayerId(1);
        service.complete_tutorial(&player).await.unwrap();

        let err = service
            .start_bout(player, &[PlayerId(2), PlayerId(3), PlayerId(4)])
            .await
            .unwrap_err();
        assert!(matches!(err, BoutError::TooManyTeammates { got: 3, .. }));

        let err = service.start_bout(player, &[player]).await.unwrap_err();
        assert!(matches!(err, BoutError::DuplicatePlayer(p) if p == player));
    }

    #[tokio::test]
    async fn solo_bout_pays_out_consistently() {
        let service = service_with_seed(3);
        let player = PlayerId(7);
        service.complete_tutorial(&player).await.unwrap();

        let before = service.progression(&player).await.unwrap();
        let report = service.start_bout(player, &[]).await.unwrap();

        assert_eq!(report.participants.len(), 1);
        let entry = &report.participants[0];

        // Solo: the team outcome is the participant's own result.
        assert_eq!(report.team_outcome, entry.result.outcome);
        match report.team_outcome {
            Outcome::Win => assert_eq!(report.star_player, Some(player)),
            Outcome::Loss => assert_eq!(report.star_player, None),
            Outcome::Draw => {}
        }
        assert_eq!(entry.grant.star_player, report.star_player == Some(player));

        let after = service.progression(&player).await.unwrap();
        assert_eq!(
            after.tokens_in_bank,
            before.tokens_in_bank - entry.grant.tokens
        );
        let level_up_tokens = entry.level_up.map_or(0, |event| event.token_reward);
        assert_eq!(after.tokens, before.tokens + entry.grant.tokens + level_up_tokens);

        let record = after.selected_brawler().unwrap();
        assert!(record.personal_best >= record.trophies);
    }

    #[tokio::test]
    async fn the_same_seed_replays_the_same_bout() {
        let player = PlayerId(11);

        let mut reports = Vec::new();
        for _ in 0..2 {
            let service = service_with_seed(42);
            service.complete_tutorial(&player).await.unwrap();
            reports.push(service.start_bout(player, &[]).await.unwrap());
        }
        assert_eq!(reports[0], reports[1]);
    }

    #[tokio::test]
    async fn teammates_are_materialized_and_rewarded() {
        let service = service_with_seed(5);
        let player = PlayerId(1);
        let friend = PlayerId(2);
        service.complete_tutorial(&player).await.unwrap();

        let report = service.start_bout(player, &[friend]).await.unwrap();
        assert_eq!(report.participants.len(), 2);

        // The teammate's record was created and paid on the team outcome.
        let friend_after = service.progression(&friend).await.unwrap();
        let friend_entry = report
            .participants
            .iter()
            .find(|entry| entry.player == friend)
            .unwrap();
        assert!(friend_after.tokens >= friend_entry.grant.tokens);
        assert!(!friend_after.tutorial_finished);
    }

    #[tokio::test]
    async fn the_bank_drains_monotonically_and_never_underflows() {
        let service = service_with_seed(8);
        let player = PlayerId(3);
        service.complete_tutorial(&player).await.unwrap();

        let mut bank = service.progression(&player).await.unwrap().tokens_in_bank;
        for _ in 0..15 {
            let report = service.start_bout(player, &[]).await.unwrap();
            let grant = report.participants[0].grant;
            assert!(grant.tokens <= bank);

            let after = service.progression(&player).await.unwrap().tokens_in_bank;
            assert_eq!(after, bank - grant.tokens);
            bank = after;
        }
    }

    #[tokio::test]
    async fn personal_best_is_monotone_across_bouts() {
        let service = service_with_seed(13);
        let player = PlayerId(4);
        service.complete_tutorial(&player).await.unwrap();

        let mut last_pb = service.total_personal_best(&player).await.unwrap();
        for _ in 0..10 {
            service.start_bout(player, &[]).await.unwrap();
            let progression = service.progression(&player).await.unwrap();
            let record = progression.selected_brawler().unwrap();
            assert!(record.personal_best >= record.trophies);

            let pb = service.total_personal_best(&player).await.unwrap();
            assert!(pb >= last_pb);
            last_pb = pb;
        }
    }

    #[tokio::test]
    async fn experience_eventually_levels_up() {
        let service = service_with_seed(21);
        let player = PlayerId(5);
        service.complete_tutorial(&player).await.unwrap();

        let mut level_up = None;
        for _ in 0..20 {
            let report = service.start_bout(player, &[]).await.unwrap();
            if let Some(event) = report.participants[0].level_up {
                level_up = Some(event);
                break;
            }
        }

        let event = level_up.expect("20 bouts of 4+ xp must cross the 30 xp threshold");
        assert_eq!(event.level, 2);
        assert_eq!(event.token_reward, 100);
        assert!(service.progression(&player).await.unwrap().level >= 2);
    }
}
