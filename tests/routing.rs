mod graph;

use approx::assert_relative_eq;
use station_routes::{
    Graph, Mode, QueryError, Route, RouteConfig, Weight, calculate_totals, find_route,
    is_path_connected, shortest_path_tree, shortest_path_tree_from,
};
use strum::IntoEnumIterator;
use test_log::test;

use crate::graph::{NETWORK_GRAPH, station};

fn route(mode: Mode, departure: &str, destination: &str) -> Option<Route> {
    find_route(&mode.into(), &NETWORK_GRAPH, departure, destination).unwrap()
}

fn labels(route: &Route) -> Vec<&str> {
    route.stations.iter().map(|s| s.as_str()).collect()
}

/// Shortest distances computed by relaxing every edge in both directions until nothing improves.
fn reference_distances(graph: &Graph, origin: &str, mode: Mode) -> Vec<Weight> {
    let mut distances = vec![Weight::INFINITY; graph.station_count()];
    distances[station(graph, origin).index()] = Weight::ZERO;

    for _ in 0..graph.station_count() {
        for (_, edge) in graph.edges() {
            let [a, b] = edge.stations;
            for (from, to) in [(a, b), (b, a)] {
                let distance = distances[from.index()] + edge.weights.get(mode);
                if distance < distances[to.index()] {
                    distances[to.index()] = distance;
                }
            }
        }
    }

    distances
}

#[test]
fn routing_find_route_001() {
    let route = route(Mode::Cheapest, "Amsterdam", "Nijmegen").unwrap();

    assert_eq!(
        labels(&route),
        vec!["Amsterdam", "Utrecht", "Arnhem", "Nijmegen"]
    );
    assert_relative_eq!(route.total_cost().value(), 22.5);
    assert_relative_eq!(route.total_time().value(), 77.0);
}

#[test]
fn routing_find_route_002() {
    let route = route(Mode::Fastest, "Amsterdam", "Nijmegen").unwrap();

    assert_eq!(labels(&route), vec!["Amsterdam", "Arnhem", "Nijmegen"]);
    assert_relative_eq!(route.total_cost().value(), 29.0);
    assert_relative_eq!(route.total_time().value(), 70.0);
}

#[test]
fn routing_find_route_003() {
    // Amsterdam and Utrecht are connected by a cheap edge and by a fast edge
    let cheapest = route(Mode::Cheapest, "Amsterdam", "Utrecht").unwrap();
    assert_eq!(labels(&cheapest), vec!["Amsterdam", "Utrecht"]);
    assert_relative_eq!(cheapest.total_cost().value(), 8.5);
    assert_relative_eq!(cheapest.total_time().value(), 27.0);

    let fastest = route(Mode::Fastest, "Amsterdam", "Utrecht").unwrap();
    assert_eq!(labels(&fastest), vec!["Amsterdam", "Utrecht"]);
    assert_relative_eq!(fastest.total_cost().value(), 12.0);
    assert_relative_eq!(fastest.total_time().value(), 24.0);

    assert_ne!(cheapest.path.edges, fastest.path.edges);
}

#[test]
fn routing_find_route_004() {
    let cheapest = route(Mode::Cheapest, "Amsterdam", "Eindhoven").unwrap();
    let fastest = route(Mode::Fastest, "Amsterdam", "Eindhoven").unwrap();

    let expected = vec!["Amsterdam", "Utrecht", "Den Bosch", "Eindhoven"];
    assert_eq!(labels(&cheapest), expected);
    assert_eq!(labels(&fastest), expected);

    assert_relative_eq!(cheapest.total_cost().value(), 24.5);
    assert_relative_eq!(cheapest.total_time().value(), 75.0);
    assert_relative_eq!(fastest.total_cost().value(), 28.0);
    assert_relative_eq!(fastest.total_time().value(), 72.0);
}

#[test]
fn routing_find_route_005() {
    let cheapest = route(Mode::Cheapest, "Amsterdam", "Rotterdam").unwrap();
    assert_eq!(labels(&cheapest), vec!["Amsterdam", "Utrecht", "Rotterdam"]);
    assert_relative_eq!(cheapest.total_cost().value(), 19.5);
    assert_relative_eq!(cheapest.total_time().value(), 65.0);

    let fastest = route(Mode::Fastest, "Rotterdam", "Amsterdam").unwrap();
    assert_eq!(
        labels(&fastest),
        vec!["Rotterdam", "Den Haag", "Leiden", "Schiphol", "Amsterdam"]
    );
    assert_relative_eq!(fastest.total_cost().value(), 20.5);
    assert_relative_eq!(fastest.total_time().value(), 57.0);
}

#[test]
fn routing_find_route_006() {
    for mode in Mode::iter() {
        let route = route(mode, "  Groningen", "Assen ").unwrap();
        assert_eq!(labels(&route), vec!["Groningen", "Zwolle", "Assen"]);
        assert_relative_eq!(route.total_cost().value(), 24.0);
        assert_relative_eq!(route.total_time().value(), 90.0);
    }
}

#[test]
fn routing_find_route_007() {
    for mode in Mode::iter() {
        assert_eq!(route(mode, "Amsterdam", "Groningen"), None);
        assert_eq!(route(mode, "Leeuwarden", "Breda"), None);
    }
}

#[test]
fn routing_find_route_008() {
    let config = RouteConfig::default();

    // stations that only appear in malformed records
    for label in ["Venlo", "Roermond", "Maastricht"] {
        assert_eq!(
            find_route(&config, &NETWORK_GRAPH, label, "Utrecht"),
            Err(QueryError::DepartureNotFound(label.to_owned()))
        );
        assert_eq!(
            find_route(&config, &NETWORK_GRAPH, "Utrecht", label),
            Err(QueryError::DestinationNotFound(label.to_owned()))
        );
    }
}

#[test]
fn routing_find_route_009() {
    let config = RouteConfig {
        mode: Mode::Cheapest,
        max_weight: Weight::new(20.0),
    };

    assert!(
        find_route(&config, &NETWORK_GRAPH, "Amsterdam", "Rotterdam")
            .unwrap()
            .is_some()
    );
    assert_eq!(
        find_route(&config, &NETWORK_GRAPH, "Amsterdam", "Nijmegen"),
        Ok(None)
    );
}

#[test]
fn routing_shortest_path_tree_001() {
    // settled distances match an exhaustive relaxation of the whole network
    let graph: &Graph = &NETWORK_GRAPH;

    for (origin, origin_station) in graph.stations() {
        for mode in Mode::iter() {
            let tree = shortest_path_tree_from(&mode.into(), graph, origin);
            let expected = reference_distances(graph, origin_station.as_str(), mode);

            for (station, _) in graph.stations() {
                assert!(
                    tree.distance(station).approx_eq(expected[station.index()]),
                    "{mode} distance from {origin:?} to {station:?}"
                );
            }
        }
    }
}

#[test]
fn routing_shortest_path_tree_002() {
    // the search stopped at the destination agrees with the exhaustive one
    let graph: &Graph = &NETWORK_GRAPH;

    for (origin, _) in graph.stations() {
        for mode in Mode::iter() {
            let full = shortest_path_tree_from(&mode.into(), graph, origin);

            for (destination, _) in graph.stations() {
                let tree = shortest_path_tree(&mode.into(), graph, origin, destination);
                assert_eq!(tree.distance(destination), full.distance(destination));
                assert_eq!(tree.distance(origin), Weight::ZERO);
            }
        }
    }
}

#[test]
fn routing_shortest_path_tree_003() {
    // paths are connected and their totals match the distance of the searched dimension
    let graph: &Graph = &NETWORK_GRAPH;

    for (origin, _) in graph.stations() {
        for (destination, _) in graph.stations() {
            for mode in Mode::iter() {
                let tree = shortest_path_tree(&mode.into(), graph, origin, destination);
                let Some(path) = tree.path(destination) else {
                    assert!(!tree.is_reachable(destination));
                    continue;
                };

                assert_eq!(path.stations.first(), Some(&origin));
                assert_eq!(path.stations.last(), Some(&destination));
                assert!(is_path_connected(graph, &path));

                let totals = path.totals(graph);
                assert!(totals.get(mode).approx_eq(tree.distance(destination)));
                assert_eq!(
                    calculate_totals(graph, &path.stations, mode),
                    Some(totals)
                );
            }
        }
    }
}

#[test]
fn routing_shortest_path_tree_004() {
    // the network is undirected: distances are symmetric
    let graph: &Graph = &NETWORK_GRAPH;

    for mode in Mode::iter() {
        for (a, _) in graph.stations() {
            let from_a = shortest_path_tree_from(&mode.into(), graph, a);
            for (b, _) in graph.stations() {
                let from_b = shortest_path_tree(&mode.into(), graph, b, a);
                assert!(from_a.distance(b).approx_eq(from_b.distance(a)));
            }
        }
    }
}

#[test]
fn routing_shortest_path_tree_005() {
    // repeated searches give the same result
    let graph: &Graph = &NETWORK_GRAPH;
    let [origin, destination] = [station(graph, "Leiden"), station(graph, "Nijmegen")];

    for mode in Mode::iter() {
        let first = shortest_path_tree(&mode.into(), graph, origin, destination);
        let second = shortest_path_tree(&mode.into(), graph, origin, destination);
        assert_eq!(first, second);
        assert_eq!(first.path(destination), second.path(destination));

        let route = find_route(&mode.into(), graph, "Leiden", "Nijmegen").unwrap();
        assert_eq!(
            route,
            find_route(&mode.into(), graph, "Leiden", "Nijmegen").unwrap()
        );
    }
}
