/// Builds a [`RouteTable`](crate::RouteTable).
///
/// ```
/// use nuclear_dispatch::{route_table, RouteTable};
///
/// let table: RouteTable<u32> = route_table! {
///     GET "/u/:uid" => 1,
///     @ "/v1" => route_table! {
///         GET "/info" => 2,
///         POST "/info" => 3
///     },
///     get "/files/*path" => 4
/// };
/// assert_eq!(table.len(), 4);
/// assert_eq!(table.routes()[3].method(), "GET");
/// ```
#[macro_export]
macro_rules! route_table {
    {@entry $table:expr, @, $prefix:expr, $sub_table:expr} => {
        $table.merge($prefix, $sub_table)
    };
    {@entry $table:expr, $method:ident, $pattern:expr, $data:expr} => {
        $table.route(stringify!($method), $pattern, $data)
    };

    {$($method:tt $pattern:expr => $data:expr),* $(,)?} => {{
        let mut __table = $crate::RouteTable::new();
        $($crate::route_table!(@entry __table, $method, $pattern, $data);)*
        __table
    }};
}
