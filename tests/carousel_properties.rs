use badgereel::{CarouselOpts, KeySpline, layout};

fn opts(page_size: usize, secs: f64, hold: f64) -> CarouselOpts {
    CarouselOpts {
        page_size,
        page_duration_secs: secs,
        hold_fraction: hold,
        viewport_width: 760.0,
    }
}

#[test]
fn cycle_and_key_times_hold_for_many_shapes() {
    for len in 1..=13usize {
        for page_size in 1..=3usize {
            for &(secs, hold) in &[(6.0, 0.55), (6.0, 0.75), (0.7, 0.01), (13.3, 0.99)] {
                let items: Vec<usize> = (0..len).collect();
                let l = layout(&items, &opts(page_size, secs, hold)).unwrap();
                let n = len.div_ceil(page_size);

                assert_eq!(l.pages.len(), n);
                assert_eq!(l.total_cycle_secs, n as f64 * secs);

                for p in &l.pages {
                    let k = &p.schedule.key_times;
                    assert_eq!(k.len(), 6);
                    assert_eq!(k[0], 0.0);
                    assert_eq!(k[5], 1.0);
                    assert!(k.windows(2).all(|w| w[0] <= w[1]), "{k:?}");
                    assert_eq!(p.schedule.values, vec![760.0, 760.0, 0.0, 0.0, -760.0, -760.0]);
                    assert_eq!(p.schedule.splines.len(), 5);
                    p.schedule.validate().unwrap();
                }
            }
        }
    }
}

#[test]
fn windows_partition_the_cycle() {
    let items: Vec<u8> = (0..11).collect();
    let l = layout(&items, &opts(2, 6.0, 0.55)).unwrap();
    for pair in l.pages.windows(2) {
        assert_eq!(pair[0].window.t1, pair[1].window.t0);
    }
    assert_eq!(l.pages[0].window.t0, 0.0);
    assert_eq!(l.pages.last().unwrap().window.t1, 1.0);

    for p in &l.pages {
        let w = p.window;
        assert!(w.t0 <= w.enter_end && w.enter_end <= w.hold_end && w.hold_end <= w.t1);
    }
}

#[test]
fn pages_cover_items_in_order() {
    let items: Vec<u32> = (0..7).collect();
    let l = layout(&items, &opts(3, 5.0, 0.5)).unwrap();
    let flat: Vec<u32> = l.pages.iter().flat_map(|p| p.items.iter().copied()).collect();
    assert_eq!(flat, items);
    assert_eq!(l.pages[2].items, &[6]);
}

#[test]
fn only_one_page_is_centered_during_a_dwell() {
    let items: Vec<u8> = (0..8).collect();
    let l = layout(&items, &opts(2, 6.0, 0.75)).unwrap();
    for (i, page) in l.pages.iter().enumerate() {
        let mid = 0.5 * (page.window.enter_end + page.window.hold_end);
        for (j, other) in l.pages.iter().enumerate() {
            let x = other.schedule.sample(mid);
            if i == j {
                assert_eq!(x, 0.0);
            } else {
                assert_eq!(x.abs(), 760.0);
            }
        }
    }
}

#[test]
fn entrance_and_exit_are_eased() {
    let l = layout(&[0, 1], &opts(2, 6.0, 0.55)).unwrap();
    let s = &l.pages[0].schedule;
    assert_eq!(s.splines[1], KeySpline::EASE_IN);
    assert_eq!(s.splines[3], KeySpline::EASE_OUT);

    // Halfway through the entrance the ease-in curve is already past the linear midpoint.
    let mid_enter = 0.5 * (s.key_times[1] + s.key_times[2]);
    assert!(s.sample(mid_enter) < 760.0 / 2.0);
}

#[test]
fn layout_is_pure() {
    let items = ["a", "b", "c", "d", "e"];
    let a = layout(&items, &opts(2, 6.0, 0.55)).unwrap();
    let b = layout(&items, &opts(2, 6.0, 0.55)).unwrap();
    assert_eq!(a.total_cycle_secs.to_bits(), b.total_cycle_secs.to_bits());
    for (pa, pb) in a.pages.iter().zip(&b.pages) {
        assert_eq!(pa.schedule, pb.schedule);
        assert_eq!(pa.window, pb.window);
        assert_eq!(pa.items, pb.items);
    }
}
