use clap::Args;
use uuid::Uuid;

use crate::auth::JwtAuth;
use crate::config::AppConfig;

#[derive(Args, Debug)]
pub struct TokenArgs {
    #[arg(long, help = "User id (UUID) to issue the token for; random when omitted")]
    pub user: Option<Uuid>,
}

pub fn handle(args: TokenArgs, config: &AppConfig) -> anyhow::Result<()> {
    let jwt = JwtAuth::new(&config.security.jwt_secret, config.security.jwt_expiry_hours)?;
    let user = args.user.unwrap_or_else(Uuid::new_v4);
    let token = jwt.generate(user)?;

    eprintln!("user: {}", user);
    println!("{}", token);
    Ok(())
}
