use cell_graphs::image::LabelImage;

/// Paints a filled axis-aligned rectangle of `label` pixels.
pub fn paint_rect(labels: &mut LabelImage, label: u32, x0: usize, y0: usize, w: usize, h: usize) {
    assert!(x0 + w <= labels.w && y0 + h <= labels.h, "rect outside frame");
    for y in y0..y0 + h {
        for x in x0..x0 + w {
            labels.set(x, y, label);
        }
    }
}

/// Paints a filled disk of `label` pixels around (cx, cy).
///
/// A disk fully inside the frame is symmetric around its center, so the
/// region centroid lands exactly on (cx, cy).
pub fn paint_disk(labels: &mut LabelImage, label: u32, cx: usize, cy: usize, r: usize) {
    let r2 = (r * r) as isize;
    for y in cy.saturating_sub(r)..=(cy + r).min(labels.h - 1) {
        for x in cx.saturating_sub(r)..=(cx + r).min(labels.w - 1) {
            let dx = x as isize - cx as isize;
            let dy = y as isize - cy as isize;
            if dx * dx + dy * dy <= r2 {
                labels.set(x, y, label);
            }
        }
    }
}
