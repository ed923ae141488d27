use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::team::Team;
use crate::utils::colors::{RESET, color_for_team};
use crate::utils::table::{Column, Table};

pub struct TeamsLogic;

impl TeamsLogic {
    /// Parse `USER=TEAM` assignments.
    pub fn parse_assignments(raw: &[String]) -> AppResult<Vec<(String, Team)>> {
        raw.iter()
            .map(|item| {
                let (user, team) = item.split_once('=').ok_or_else(|| {
                    AppError::Config(format!("Expected USER=TEAM, got '{}'", item))
                })?;
                let team = Team::from_code(team)
                    .ok_or_else(|| AppError::InvalidTeam(team.to_string()))?;
                Ok((user.trim().to_string(), team))
            })
            .collect()
    }

    /// Apply all assignments, then rewrite the config document once.
    ///
    /// Unknown users abort the whole update before anything is written.
    pub fn apply(
        pool: &mut DbPool,
        cfg: &mut Config,
        assignments: &[(String, Team)],
    ) -> AppResult<()> {
        for (user, _) in assignments {
            if cfg.user(user).is_none() {
                return Err(AppError::UnknownUser(user.clone()));
            }
        }

        for (user, team) in assignments {
            cfg.set_team(user, *team)?;
        }
        cfg.save()?;

        for (user, team) in assignments {
            audit(&pool.conn, "teams", user, &format!("Team set to {}", team));
        }
        Ok(())
    }

    pub fn render(cfg: &Config) -> String {
        let mut table = Table::new(vec![
            Column::new("username", 16),
            Column::new("name", 24),
            Column::new("team", 6),
            Column::new("admin", 5),
        ]);

        for (username, user) in &cfg.credentials.usernames {
            table.add_row(vec![
                username.clone(),
                user.name.clone(),
                format!("{}{}{RESET}", color_for_team(user.team), user.team),
                if user.admin { "yes".into() } else { "".into() },
            ]);
        }

        table.render()
    }
}
