//! The standard Gremlin step vocabulary.
//!
//! Each entry becomes a chain method on [`GraphTraversal`](super::GraphTraversal)
//! that appends a method step; names are camelCased unless given explicitly.

use gremlin_dsl_macros::steps;

steps! {
    // Start steps
    /// Appends a `V(...)` step, selecting vertices by optional ids.
    v => "V",
    /// Appends an `E(...)` step, selecting edges by optional ids.
    e => "E",
    add_v => "addV",
    add_e => "addE",
    inject,

    // Navigation
    out,
    in_ => "in",
    both,
    out_e => "outE",
    in_e => "inE",
    both_e => "bothE",
    out_v => "outV",
    in_v => "inV",
    both_v => "bothV",
    other_v => "otherV",
    from,
    to,

    // Filters
    has,
    has_label,
    has_id,
    has_key,
    has_value,
    has_not,
    is,
    where_ => "where",
    filter,
    and,
    or,
    not,
    dedup,
    limit,
    range,
    skip,
    tail,
    simple_path,
    cyclic_path,
    coin,
    sample,

    // Maps
    id,
    label,
    key,
    value,
    values,
    value_map,
    element_map,
    properties,
    property,
    select,
    project,
    path,
    constant,
    count,
    sum,
    max,
    min,
    mean,
    fold,
    unfold,
    group,
    group_count,
    order,
    by,
    as_ => "as",
    math,
    cap,

    // Branching and looping
    choose,
    option,
    optional,
    coalesce,
    union,
    local,
    repeat,
    until,
    times,
    emit,
    match_ => "match",

    // Side effects
    side_effect,
    aggregate,
    store,
    drop,
    iterate,
    to_list,
    explain,
    profile,
}
