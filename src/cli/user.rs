//! User and S3 key command definitions and arguments

use clap::{Args, Subcommand};

use super::common::{ListArgs, WaitArgs};

/// User subcommands
#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// List users
    #[command(visible_alias = "ls")]
    List(ListArgs),
    /// Get a user
    #[command(visible_alias = "g")]
    Get(UserIdArgs),
    /// Create a user
    #[command(visible_alias = "c")]
    Create(UserCreateArgs),
    /// Update a user; properties not given keep their current value
    #[command(visible_alias = "u")]
    Update(UserUpdateArgs),
    /// Delete a user, or every user with --all
    #[command(visible_alias = "d")]
    Delete(UserDeleteArgs),
}

#[derive(Args, Debug)]
pub struct UserIdArgs {
    /// The unique User Id
    #[arg(short = 'i', long = "user-id")]
    pub user_id: String,
}

/// Optional user properties
#[derive(Args, Debug, Clone, Default)]
pub struct UserFields {
    /// Grant administrator rights (--admin=false to revoke)
    #[arg(long = "admin", num_args = 0..=1, default_missing_value = "true")]
    pub administrator: Option<bool>,
    /// Require two-factor authentication (--force-secure-auth=false to lift)
    #[arg(long = "force-secure-auth", num_args = 0..=1, default_missing_value = "true")]
    pub force_sec_auth: Option<bool>,
    /// Whether the user is active (--active=false to deactivate)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub active: Option<bool>,
}

#[derive(Args, Debug)]
pub struct UserCreateArgs {
    /// The first name of the user
    #[arg(long = "first-name")]
    pub first_name: String,
    /// The last name of the user
    #[arg(long = "last-name")]
    pub last_name: String,
    /// The email of the user
    #[arg(short = 'e', long)]
    pub email: String,
    /// The password of the user (at least 5 characters)
    #[arg(short = 'p', long)]
    pub password: String,
    #[command(flatten)]
    pub fields: UserFields,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Debug)]
pub struct UserUpdateArgs {
    /// The unique User Id
    #[arg(short = 'i', long = "user-id")]
    pub user_id: String,
    /// The first name of the user
    #[arg(long = "first-name")]
    pub first_name: Option<String>,
    /// The last name of the user
    #[arg(long = "last-name")]
    pub last_name: Option<String>,
    /// The email of the user
    #[arg(short = 'e', long)]
    pub email: Option<String>,
    /// New password of the user
    #[arg(short = 'p', long)]
    pub password: Option<String>,
    #[command(flatten)]
    pub fields: UserFields,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Debug)]
pub struct UserDeleteArgs {
    /// The unique User Id
    #[arg(
        short = 'i',
        long = "user-id",
        required_unless_present = "all",
        conflicts_with = "all"
    )]
    pub user_id: Option<String>,
    /// Delete all users
    #[arg(short = 'a', long, default_value_t = false)]
    pub all: bool,
    #[command(flatten)]
    pub wait: WaitArgs,
}

/// S3 key subcommands
#[derive(Subcommand, Debug)]
pub enum S3KeyCommand {
    /// List the S3 keys of a user
    #[command(visible_alias = "ls")]
    List(S3KeyListArgs),
    /// Get an S3 key
    #[command(visible_alias = "g")]
    Get(S3KeyGetArgs),
    /// Create an S3 key for a user
    #[command(visible_alias = "c")]
    Create(S3KeyCreateArgs),
    /// Activate or deactivate an S3 key
    #[command(visible_alias = "u")]
    Update(S3KeyUpdateArgs),
    /// Delete an S3 key, or every key of the user with --all
    #[command(visible_alias = "d")]
    Delete(S3KeyDeleteArgs),
}

#[derive(Args, Debug)]
pub struct S3KeyListArgs {
    /// The unique User Id
    #[arg(long = "user-id")]
    pub user_id: String,
    #[command(flatten)]
    pub list: ListArgs,
}

#[derive(Args, Debug)]
pub struct S3KeyGetArgs {
    /// The unique User Id
    #[arg(long = "user-id")]
    pub user_id: String,
    /// The unique Access Key Id
    #[arg(short = 'i', long = "s3key-id")]
    pub s3key_id: String,
}

#[derive(Args, Debug)]
pub struct S3KeyCreateArgs {
    /// The unique User Id
    #[arg(long = "user-id")]
    pub user_id: String,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Debug)]
pub struct S3KeyUpdateArgs {
    /// The unique User Id
    #[arg(long = "user-id")]
    pub user_id: String,
    /// The unique Access Key Id
    #[arg(short = 'i', long = "s3key-id")]
    pub s3key_id: String,
    /// Activate or deactivate the key (--s3key-active=false to deactivate)
    #[arg(long = "s3key-active", num_args = 0..=1, default_missing_value = "true")]
    pub active: Option<bool>,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Debug)]
pub struct S3KeyDeleteArgs {
    /// The unique User Id
    #[arg(long = "user-id")]
    pub user_id: String,
    /// The unique Access Key Id
    #[arg(
        short = 'i',
        long = "s3key-id",
        required_unless_present = "all",
        conflicts_with = "all"
    )]
    pub s3key_id: Option<String>,
    /// Delete all S3 keys of the user
    #[arg(short = 'a', long, default_value_t = false)]
    pub all: bool,
    #[command(flatten)]
    pub wait: WaitArgs,
}
