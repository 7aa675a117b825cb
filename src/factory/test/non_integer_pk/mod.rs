use crate::{
    error::FactoryError,
    factory::{NonIntegerPkFactory, Sequenced},
};
use sea_orm::EntityTrait;
use test_utils::builder::TestBuilder;
