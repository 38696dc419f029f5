use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::rank::Rank,
    server::{error::AppError, service::player::PlayerService},
};

mod get_roster;
