/// Drops the listed tables in order.
#[macro_export]
macro_rules! drop_tables {
    ($manager:ident, $($table:ident),+ $(,)?) => {
        $(
            $manager
                .drop_table(Table::drop().table($table::Table).if_exists().to_owned())
                .await?;
        )+
    };
}

/// Drops the listed Postgres enum types in order.
#[macro_export]
macro_rules! drop_types {
    ($manager:ident, $($type:ident),+ $(,)?) => {
        $(
            $manager
                .drop_type(Type::drop().name($type::Table).if_exists().to_owned())
                .await?;
        )+
    };
}

pub(crate) use drop_tables;
pub(crate) use drop_types;
