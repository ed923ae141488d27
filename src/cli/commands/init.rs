use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::users::UserLogic;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::team::Team;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (existing credentials are kept)
///  - the SQLite database and all pending migrations
///  - optionally, an admin user
pub fn handle(cli: &Cli, loaded: &Config) -> AppResult<()> {
    if let Commands::Init {
        admin,
        password,
        name,
        team,
    } = &cli.command
    {
        //
        // 1️⃣ CONFIGURATION
        //
        // `--db` was already resolved to an absolute path by run()
        let custom_db = cli.db.as_ref().map(|_| loaded.database.as_str());
        let config_path = loaded.path.clone();
        let mut cfg = Config::init_all(&config_path, custom_db)?;

        println!("⚙️  Initializing rStopwatch…");
        println!("📄 Config file : {}", config_path.display());
        println!("🗄️  Database   : {}", &cfg.database);

        //
        // 2️⃣ DATABASE (tables + migrations)
        //
        let pool = DbPool::new(&cfg.database)?;
        println!("✅ Database initialized at {}", &cfg.database);

        //
        // 3️⃣ OPTIONAL ADMIN SEED
        //
        if let Some(user) = admin {
            let pw = password.as_deref().ok_or_else(|| {
                AppError::Validation("--password is required with --admin".into())
            })?;
            let team = match team {
                Some(t) => Team::from_code(t).ok_or_else(|| AppError::InvalidTeam(t.clone()))?,
                None => Team::Coach,
            };
            UserLogic::add(Some(&pool), &mut cfg, user, pw, name.as_deref(), team, true)?;
            println!("👤 Admin user  : {}", user);
        }

        //
        // 4️⃣ INTERNAL LOG (non blocking)
        //
        audit(
            &pool.conn,
            "init",
            "Database initialized",
            &format!("Database initialized at {}", &cfg.database),
        );

        println!("🎉 rStopwatch initialization completed!");
    }
    Ok(())
}
