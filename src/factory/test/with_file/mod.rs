use crate::{
    error::{field::FieldError, FactoryError},
    factory::WithFileFactory,
    field::{FieldFile, FileField, FileHandle, FileInput, FileParams},
    model::WithFile,
    storage::FileSystemStorage,
};
use sea_orm::EntityTrait;
use test_utils::{
    builder::TestBuilder,
    fixture::testdata::{testfile_path, TESTFILE_CONTENT},
};

mod build;
mod create;
