use crate::tool::config::{Action, SortOrder, Source, Stamp, ToolConfig};
use anyhow::Context;
use hashuid::{
    BinaryUidExt, Extra, HashUid, HashUidBuilder, Uid, UidBuilder, Xxh3Hasher, group_by_shard,
    sort_by_shard,
};
use serde::Serialize;
use std::io::{BufRead, Read, Write};

/// The components of an identifier, as printed by `new`, `parse` and
/// `decode`.
#[derive(Debug, Serialize)]
struct Components<'a> {
    id: &'a HashUid,
    h0: i32,
    h1: i32,
    h2: i32,
    time: Option<i64>,
    extra: Option<&'a Extra>,
    sharded_portion: String,
    option_prefix: String,
}

impl<'a> From<&'a HashUid> for Components<'a> {
    fn from(uid: &'a HashUid) -> Self {
        Self {
            id: uid,
            h0: uid.h0(),
            h1: uid.h1(),
            h2: uid.h2(),
            time: uid.time(),
            extra: uid.extra(),
            sharded_portion: uid.sharded_portion(),
            option_prefix: uid.option_prefix(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Encoded<'a> {
    id: &'a HashUid,
    hex: String,
}

/// Executes the configured action, reading any line or content input from
/// `input` and writing results to `out`.
pub fn run<R, W>(config: &ToolConfig, mut input: R, out: &mut W) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    let builder = HashUidBuilder::with_hasher(Xxh3Hasher::with_seed(config.seed));

    match &config.action {
        Action::New {
            source,
            stamp,
            extra,
        } => {
            let data = read_source(source, &mut input)?;
            let data = data.as_deref();
            let uid = match stamp {
                Stamp::Untimed => builder.new_id_with_extra(data, None, extra.clone()),
                Stamp::Now => builder.new_id_now(data).with_extra(extra.clone()),
                Stamp::At(at) => builder.new_id_with_extra(data, Some(*at), extra.clone()),
            };
            tracing::debug!(%uid, len = data.map_or(0, <[u8]>::len), "derived identifier");
            write_components(config.json, &uid, out)
        }
        Action::Parse { id, depth } => {
            let uid = HashUid::parse_with_depth(id, *depth)
                .with_context(|| format!("`{id}` is not a valid identifier"))?;
            write_components(config.json, &uid, out)
        }
        Action::Base { ids } => {
            let ids = if ids.is_empty() {
                read_lines(input)?
            } else {
                ids.clone()
            };
            let bases = ids
                .iter()
                .map(|id| {
                    HashUid::parse_base(id)
                        .map(|uid| uid.to_string())
                        .with_context(|| format!("`{id}` is not a valid identifier"))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            write_list(config.json, &bases, out)
        }
        Action::Sort { order } => {
            let mut uids = read_lines(input)?
                .iter()
                .map(|id| {
                    HashUid::parse(id).with_context(|| format!("`{id}` is not a valid identifier"))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            tracing::debug!(count = uids.len(), ?order, "sorting identifiers");
            match order {
                SortOrder::Text => {
                    uids.sort();
                    write_list(config.json, &uids, out)
                }
                SortOrder::Shard => {
                    sort_by_shard(&mut uids);
                    write_list(config.json, &uids, out)
                }
                SortOrder::Group => {
                    let groups = group_by_shard(uids);
                    if config.json {
                        serde_json::to_writer(&mut *out, &groups)?;
                        writeln!(out)?;
                    } else {
                        for (shard, uids) in &groups {
                            writeln!(out, "{shard}")?;
                            for uid in uids {
                                writeln!(out, "  {uid}")?;
                            }
                        }
                    }
                    Ok(())
                }
            }
        }
        Action::Encode { id } => {
            let uid =
                HashUid::parse(id).with_context(|| format!("`{id}` is not a valid identifier"))?;
            let hex = hex::encode(uid.to_bytes()?);
            if config.json {
                serde_json::to_writer(&mut *out, &Encoded { id: &uid, hex })?;
                writeln!(out)?;
            } else {
                writeln!(out, "{hex}")?;
            }
            Ok(())
        }
        Action::Decode { bytes } => {
            let uid = HashUid::from_bytes(bytes.as_slice())
                .context("input is not a binary identifier")?;
            write_components(config.json, &uid, out)
        }
    }
}

fn read_source<R: BufRead>(source: &Source, input: &mut R) -> anyhow::Result<Option<Vec<u8>>> {
    Ok(match source {
        Source::Absent => None,
        Source::Inline(data) => Some(data.clone()),
        Source::File(path) => Some(
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?,
        ),
        Source::Stdin => {
            let mut data = Vec::new();
            input
                .read_to_end(&mut data)
                .context("failed to read stdin")?;
            Some(data)
        }
    })
}

/// Reads one identifier per line, ignoring blank lines and surrounding
/// whitespace.
fn read_lines<R: BufRead>(input: R) -> anyhow::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in input.lines() {
        let line = line.context("failed to read stdin")?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_owned());
        }
    }
    Ok(lines)
}

fn write_components<W: Write>(json: bool, uid: &HashUid, out: &mut W) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer(&mut *out, &Components::from(uid))?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "id:              {uid}")?;
    writeln!(out, "h0:              {}", uid.h0())?;
    writeln!(out, "h1:              {}", uid.h1())?;
    writeln!(out, "h2:              {}", uid.h2())?;
    if let Some(time) = uid.time() {
        writeln!(out, "time:            {time}")?;
    }
    if let Some(extra) = uid.extra() {
        writeln!(out, "extra:           {extra}")?;
    }
    writeln!(out, "sharded portion: {}", uid.sharded_portion())?;
    writeln!(out, "option prefix:   {}", uid.option_prefix())?;
    Ok(())
}

fn write_list<T, W>(json: bool, items: &[T], out: &mut W) -> anyhow::Result<()>
where
    T: Serialize + std::fmt::Display,
    W: Write,
{
    if json {
        serde_json::to_writer(&mut *out, items)?;
        writeln!(out)?;
    } else {
        for item in items {
            writeln!(out, "{item}")?;
        }
    }
    Ok(())
}
