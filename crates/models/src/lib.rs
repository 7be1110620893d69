/// Stores a `u8`-backed bit set as a `SMALLINT` column
#[cfg(feature = "database")]
macro_rules! impl_small_int_value {
    ($ty:ident) => {
        impl sea_orm::sea_query::ValueType for $ty {
            fn try_from(v: sea_orm::Value) -> Result<Self, sea_orm::sea_query::ValueTypeErr> {
                match v {
                    sea_orm::Value::SmallInt(Some(bits)) => <u8 as TryFrom<i16>>::try_from(bits)
                        .ok()
                        .and_then($ty::from_bits)
                        .ok_or(sea_orm::sea_query::ValueTypeErr),
                    _ => Err(sea_orm::sea_query::ValueTypeErr),
                }
            }

            fn type_name() -> String {
                stringify!($ty).to_string()
            }

            fn array_type() -> sea_orm::sea_query::ArrayType {
                sea_orm::sea_query::ArrayType::SmallInt
            }

            fn column_type() -> sea_orm::sea_query::ColumnType {
                sea_orm::sea_query::ColumnType::SmallInteger
            }
        }

        impl From<$ty> for sea_orm::Value {
            fn from(set: $ty) -> Self {
                sea_orm::Value::SmallInt(Some(i16::from(set.bits())))
            }
        }

        impl sea_orm::TryGetable for $ty {
            fn try_get_by<I: sea_orm::ColIdx>(
                res: &sea_orm::QueryResult,
                index: I,
            ) -> Result<Self, sea_orm::TryGetError> {
                let val: i16 = res.try_get_by(index)?;

                <u8 as TryFrom<i16>>::try_from(val)
                    .ok()
                    .and_then($ty::from_bits)
                    .ok_or_else(|| {
                        sea_orm::TryGetError::DbErr(sea_orm::DbErr::Type(format!(
                            "Invalid {} bits: {val}",
                            stringify!($ty)
                        )))
                    })
            }
        }

        impl sea_orm::sea_query::Nullable for $ty {
            fn null() -> sea_orm::Value {
                sea_orm::Value::SmallInt(None)
            }
        }
    };
}

pub mod course;
pub mod days;
pub mod guideline;
pub mod military_time;
pub mod semester;
