use crate::server::{
    data::staff_warning::StaffWarningRepository, model::player::CreateStaffWarningParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
